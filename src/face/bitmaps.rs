//! Canonical face bitmaps.
//!
//! `.` is background, `0`-`9` index into [`PALETTE`](super::PALETTE).

/// Rows per stock face.
pub const FACE_HEIGHT: usize = 28;

/// Pixels per stock face row.
pub const FACE_WIDTH: usize = 25;

/// Number of stock faces.
pub const FACE_COUNT: usize = 6;

pub(crate) static FACES: [[&str; FACE_HEIGHT]; FACE_COUNT] = [
    // Composed (the default).
    [
        "...........112...........",
        "..........12.............",
        "..........2..............",
        "...........2.............",
        "..........12.11113...13..",
        ".....12..1111121113.11133",
        "...1112..12111121113.1113",
        "..112.2.11111121111111113",
        "..12.2.111111111111211113",
        "....111111111111111211113",
        "..12.31112111121111111213",
        "..12.32112211122111122123",
        "..112.3112122112211121213",
        "...12.3121161212211112123",
        "...112.322661166621111213",
        "....12.35540516406213.3..",
        "....1121155555555613..13.",
        ".....12.15555655663..123.",
        ".....11..155555556...113.",
        "......11...500056.....3..",
        "............5556......3..",
        ".............666.........",
        "...........776678........",
        "........57717777188......",
        ".......567717171777856...",
        "......56777718177785556..",
        ".....556777771777785556..",
        ".....55677777777785556...",
    ],
    // Smiling, eyes closed.
    [
        "...........112...........",
        "..........12.............",
        "..........2..............",
        "...........2.............",
        "..........12.11113...13..",
        ".....12..1111111113.11133",
        "...1112..12111121113.1113",
        "..112.2.11111121111112113",
        "..12.2.111111111111211113",
        "....111111111111111211113",
        "..12.31112111121111111213",
        "..12.32112211112111122123",
        "..112.3112621156211121213",
        "...12.3125562155611112123",
        "...112.325056150552111213",
        "....12.31050550505213.3..",
        "....1121155555555613..13.",
        ".....12.15555555661..123.",
        ".....11..150110566...113.",
        "......11...500556.....3..",
        "............5556......3..",
        ".............666.........",
        "...........776678........",
        "........57717777188......",
        ".......567717171777856...",
        "......56777718177785556..",
        ".....556777771777785556..",
        ".....55677777777785556...",
    ],
    // Sharp look with a grin.
    [
        "...........112...........",
        "..........12.............",
        "..........2..............",
        "...........2.............",
        "..........12.11113...13..",
        ".....12..1111121113.11133",
        "...1112..12111121113.1113",
        "..112.2.11111121111111113",
        "..12.2.111111111111211113",
        "....111111111111111211113",
        "..12.31112111121111111213",
        "..12.32112211122111122123",
        "..112.3112122112211121213",
        "...12.3121161212211112123",
        "...112.322661166621111213",
        "....12.35540516406213.3..",
        "....1121155555555613..13.",
        ".....12.15555555663..123.",
        ".....11..150110556...113.",
        "......11...500556.....3..",
        "............5556......3..",
        ".............666.........",
        "...........776678........",
        "........57717777188......",
        ".......567717171777856...",
        "......56777718177785556..",
        ".....556777771777785556..",
        ".....55677777777785556...",
    ],
    // Eyes wide open.
    [
        "...........112...........",
        "..........12.............",
        "..........2..............",
        "...........2.............",
        "..........12.11113...13..",
        ".....12..1111121113.11133",
        "...1112..12111121113.1113",
        "..112.2.11111121111111113",
        "..12.2.111111111111211113",
        "....111111111111111211113",
        "..12.31112111121111111213",
        "..12.32112211122111122123",
        "..112.3112122112211121213",
        "...12.3121161212211112123",
        "...112.322000160001111213",
        "....12.35504516046213.3..",
        "....1121155555555613..13.",
        ".....12.15555655663..123.",
        ".....11..155555556...113.",
        "......11...501056.....3..",
        "............5556......3..",
        ".............666.........",
        "...........776678........",
        "........57717777188......",
        ".......567717171777856...",
        "......56777718177785556..",
        ".....556777771777785556..",
        ".....55677777777785556...",
    ],
    // Surprised, mouth open.
    [
        "...........112...........",
        "..........12.............",
        "..........2..............",
        "...........2.............",
        "..........12.11113...13..",
        ".....12..1111121113.11133",
        "...1112..12111121113.1113",
        "..112.2.11111121111111113",
        "..12.2.111111111111211113",
        "....111111111111111211113",
        "..12.31112111121111111213",
        "..12.32112211122111122123",
        "..112.3112122112211121213",
        "...12.3121011210211112123",
        "...112.320505105021111213",
        "....12.35050550506213.3..",
        "....1121150555505613..13.",
        ".....12.15555555563..123.",
        ".....11..155000556...113.",
        "......11...501056.....3..",
        "............5556......3..",
        ".............666.........",
        "...........776678........",
        "........57717777188......",
        ".......567717171777856...",
        "......56777718177785556..",
        ".....556777771777785556..",
        ".....55677777777785556...",
    ],
    // Troubled.
    [
        "...........112...........",
        "..........12.............",
        "..........2..............",
        "...........2.............",
        "..........12.11113...13..",
        ".....12..1111121113.11133",
        "...1112..12111121113.1113",
        "..112.2.11111121111111113",
        "..12.2.111111111111211113",
        "....111111111111111211113",
        "..12.31112111121111111213",
        "..12.32112211122111122123",
        "..112.3112122112211121213",
        "...12.3121111212211112123",
        "...112.320001100021111213",
        "....12.35545555456213.3..",
        "....1121100055000613..13.",
        ".....12.15655655663..123.",
        ".....11..155555556...113.",
        "......11...501056.....3..",
        "............5556......3..",
        ".............666.........",
        "...........776678........",
        "........57717777188......",
        ".......567717171777856...",
        "......56777718177785556..",
        ".....556777771777785556..",
        ".....55677777777785556...",
    ],
];
