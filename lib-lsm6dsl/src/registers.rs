pub const WHO_AM_I: u8 = 0x0F;

pub const CTRL2_G: u8 = 0x11; //[7:4] ODR_G, [3:2] FS_G, [1] FS_125
pub const CTRL3_C: u8 = 0x12; //[6] BDU, [5] H_LACTIVE, [2] IF_INC
pub const CTRL4_C: u8 = 0x13; //[1] LPF1_SEL_G
pub const CTRL6_C: u8 = 0x15; //[1:0] FTYPE
pub const CTRL7_G: u8 = 0x16; //[7] G_HM_MODE, [6] HP_EN_G, [5:4] HPM_G

pub const OUT_TEMP_L: u8 = 0x20;
pub const OUT_TEMP_H: u8 = 0x21;

pub const OUTX_L_G: u8 = 0x22;
pub const OUTX_H_G: u8 = 0x23;
pub const OUTY_L_G: u8 = 0x24;
pub const OUTY_H_G: u8 = 0x25;
pub const OUTZ_L_G: u8 = 0x26;
pub const OUTZ_H_G: u8 = 0x27;

pub const ODR_G_MASK: u8 = 0b1111_0000;
pub const FS_G_MASK: u8 = 0b0000_1110;

pub const BDU_MASK: u8 = 0b0110_0100;
pub const BDU_ENABLED: u8 = 0b0110_0100;

pub const LPF1_SEL_G_MASK: u8 = 0b0000_0010;
pub const LPF1_SEL_G: u8 = 0b0000_0010;

pub const FTYPE_MASK: u8 = 0b0000_0011;

pub const G_HM_MODE_MASK: u8 = 0b1000_0000;
pub const HP_EN_G_MASK: u8 = 0b0100_0000;
pub const HP_EN_G: u8 = 0b0100_0000;
pub const HPM_G_MASK: u8 = 0b0011_0000;
