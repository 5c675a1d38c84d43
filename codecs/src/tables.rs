//! Bundled table data.
//!
//! Abridged GBK ↔ Unicode mapping: the GB2312 punctuation and fullwidth
//! rows plus common hanzi, and the head of the GBK/3 extension area.
//! Complete tables are produced by the offline generator from the registry
//! mapping files; the layout contract is [`crate::DoubleByteTable`]'s.

/// `(lead << 8 | trail, code point)` pairs, sorted by the packed key.
pub(crate) const GBK_PAIRS: &[(u16, u16)] = &[
    (0x8140, 0x4E02), // 丂
    (0x8141, 0x4E04), // 丄
    (0xA1A1, 0x3000), // ideographic space
    (0xA1A2, 0x3001), // 、
    (0xA1A3, 0x3002), // 。
    (0xA1B6, 0x300A), // 《
    (0xA1B7, 0x300B), // 》
    (0xA3A1, 0xFF01), // ！
    (0xA3AC, 0xFF0C), // ，
    (0xA3BA, 0xFF1A), // ：
    (0xA3BF, 0xFF1F), // ？
    (0xB0A1, 0x554A), // 啊
    (0xB0AE, 0x7231), // 爱
    (0xB1B1, 0x5317), // 北
    (0xB4F3, 0x5927), // 大
    (0xB5C4, 0x7684), // 的
    (0xB9FA, 0x56FD), // 国
    (0xBAC3, 0x597D), // 好
    (0xBACD, 0x548C), // 和
    (0xBEA9, 0x4EAC), // 京
    (0xC0B4, 0x6765), // 来
    (0xC1CB, 0x4E86), // 了
    (0xC3C7, 0x4EEC), // 们
    (0xC3F7, 0x660E), // 明
    (0xC4E3, 0x4F60), // 你
    (0xC4EA, 0x5E74), // 年
    (0xC8CB, 0x4EBA), // 人
    (0xC8D5, 0x65E5), // 日
    (0xC9CF, 0x4E0A), // 上
    (0xC9FA, 0x751F), // 生
    (0xCAB1, 0x65F6), // 时
    (0xCAC0, 0x4E16), // 世
    (0xCAC7, 0x662F), // 是
    (0xCCEC, 0x5929), // 天
    (0xCEC4, 0x6587), // 文
    (0xCED2, 0x6211), // 我
    (0xCFC2, 0x4E0B), // 下
    (0xD0A1, 0x5C0F), // 小
    (0xD1A7, 0x5B66), // 学
    (0xD2BB, 0x4E00), // 一
    (0xD3D0, 0x6709), // 有
    (0xD4DA, 0x5728), // 在
    (0xD6D0, 0x4E2D), // 中
    (0xD7D6, 0x5B57), // 字
];
