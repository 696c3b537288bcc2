//! Slider magic multipliers used by the shared attack tables.
//!
//! Regenerate with `chess_core magics --seed <n>`; any replacement must pass
//! the subset-equivalence test in `attack_tables`.

pub const BISHOP_MAGICS: [u64; 64] = [
    0x0010_C218_0802_2040, 0x0048_3001_0041_0404, 0x0050_0480_8114_8420, 0x0044_051A_0002_0022,
    0x8804_0420_8009_8404, 0x4202_4802_4000_0030, 0x0001_0101_5040_4100, 0x0000_4400_5110_1010,
    0x0210_0488_0208_0210, 0x0210_1044_1840_8221, 0x3000_0800_D400_8040, 0x0244_0820_4049_8900,
    0x108C_0404_2000_0000, 0x4002_0688_0C40_0888, 0x0000_1488_4410_0440, 0xA400_0101_0D01_2005,
    0x0208_8410_1010_00C4, 0x0002_4020_0842_4480, 0x0088_8130_0020_4300, 0x0008_0500_8821_0000,
    0x0002_000C_1202_2002, 0x0012_0041_0809_040D, 0x2008_4042_0804_04B4, 0x0042_0021_0482_2100,
    0x0002_2108_1004_1000, 0x0382_3200_1010_0214, 0x0004_1000_2A00_8210, 0x2A00_8020_0802_0020,
    0x0010_4040_4401_0040, 0x0110_0040_0208_2211, 0x1038_8110_0094_1000, 0x4B10_4604_1080_8400,
    0x0421_0840_4A88_1100, 0x0000_9004_0010_0402, 0x0286_0041_1090_0100, 0x0002_8200_8108_0080,
    0x0400_4100_4084_0041, 0x4210_0042_0001_9200, 0x0208_0831_0800_8084, 0x0AB2_0602_0120_4450,
    0x0814_2202_1019_4000, 0x8401_0801_1080_0400, 0x0921_2200_3004_0A01, 0x0042_044C_2400_8800,
    0x3904_2002_0412_0080, 0x0440_0088_0040_0484, 0x0010_0200_8100_0410, 0x0204_4402_A021_0204,
    0x0400_A40B_2840_4009, 0x1400_8211_1002_0010, 0x6000_0144_1C04_2410, 0x4088_0400_8404_0001,
    0x0002_0042_1041_0000, 0x0140_1020_8101_004A, 0x0420_8810_0106_5200, 0x8250_0182_1408_4001,
    0x0011_8645_0820_0200, 0x0100_030C_1484_142A, 0xC009_0000_4404_0420, 0x0808_4410_0884_0409,
    0x0804_8000_6810_2419, 0x0000_0240_0448_4080, 0x4102_C130_0C00_B880, 0x0402_0404_0428_4602,
];

pub const ROOK_MAGICS: [u64; 64] = [
    0x0080_0081_10E1_C002, 0x02C0_4000_2000_3000, 0xA080_0820_0080_1006, 0x4100_0990_0065_0020,
    0x1900_1004_0208_0100, 0x0200_0804_9001_0200, 0x0300_0C41_0000_8A00, 0x2280_0A41_0004_2A80,
    0xC814_8000_2240_0086, 0x4400_4000_2010_0048, 0xD200_8080_2000_1000, 0x4412_0010_0840_2600,
    0x1001_0004_0800_1100, 0x0212_0008_0201_1004, 0x4042_0001_4A00_1488, 0x0040_8000_8000_4100,
    0x0000_9080_0040_0822, 0x00B0_0040_0040_2008, 0x0000_8480_2000_1000, 0x0020_0900_2100_1000,
    0x1004_0080_0800_0480, 0x0C01_0100_0208_0400, 0x0000_1400_2811_0250, 0x0220_0200_0100_508C,
    0x0000_4010_8000_2080, 0x0140_4000_8020_1080, 0x0081_2001_0011_0B40, 0x0080_0812_0040_2200,
    0x0000_0800_8080_0400, 0x1010_0400_8080_0200, 0x0024_0200_8080_0100, 0xA280_1102_0020_8044,
    0x0000_4000_8080_0023, 0x8000_4000_8080_2001, 0x0000_4020_0100_1900, 0x14D0_0081_1180_0800,
    0x0010_0400_8080_0802, 0x0200_0200_8080_0400, 0x6101_0004_0101_0200, 0x0041_0404_4200_0991,
    0x0000_60C0_0D80_8002, 0x0450_0020_0041_4000, 0x0001_0040_2005_0010, 0x0001_1005_00A1_0008,
    0x0088_0400_0800_8080, 0x0002_2004_1008_0140, 0x0000_0100_0200_8080, 0x0004_1085_1952_0004,
    0x002E_2100_C880_1100, 0x0082_4010_0020_0140, 0x0001_0014_2000_4900, 0x2C00_2210_0039_0300,
    0x4981_0010_0800_0500, 0x0010_8004_0006_0180, 0x0040_0142_1008_0400, 0x0000_004C_1081_0200,
    0x0500_9140_2480_0101, 0x0000_4020_8201_0012, 0x0002_2000_1008_4301, 0x8000_1001_0020_0409,
    0x0409_0002_0800_9005, 0x8812_0001_0804_1002, 0x0040_1001_0248_2084, 0x0410_1024_1100_8042,
];
