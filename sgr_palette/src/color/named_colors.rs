// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named entries of the 256-color palette.
//!
//! The ordinal is the only thing that matters at runtime, the hex value in each doc
//! comment is the conventional xterm rendering of that entry.
//!
//! Ordinals 16, 21, 46, 51, 196, 201, 226, 231 and 244 render the same as one of the
//! 16 standard colors, so they don't get a name of their own. They are still valid
//! [`AnsiValue`]s, use [`AnsiValue::new()`] to get at them.
//!
//! More info:
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

use super::AnsiValue;

#[rustfmt::skip]
impl AnsiValue {
    // Standard colors (0-7).
    /// `#000000`
    pub const BLACK: AnsiValue = AnsiValue::new(0);
    /// `#800000`
    pub const MAROON: AnsiValue = AnsiValue::new(1);
    /// `#008000`
    pub const OFFICE_GREEN: AnsiValue = AnsiValue::new(2);
    /// `#808000`
    pub const OLIVE: AnsiValue = AnsiValue::new(3);
    /// `#000080`
    pub const NAVY_BLUE: AnsiValue = AnsiValue::new(4);
    /// `#800080`
    pub const PURPLE: AnsiValue = AnsiValue::new(5);
    /// `#008080`
    pub const TEAL: AnsiValue = AnsiValue::new(6);
    /// `#C0C0C0`
    pub const SILVER: AnsiValue = AnsiValue::new(7);

    // High intensity colors (8-15).
    /// `#808080`
    pub const GRAY: AnsiValue = AnsiValue::new(8);
    /// `#FF0000`
    pub const RED: AnsiValue = AnsiValue::new(9);
    /// `#00FF00`
    pub const GREEN: AnsiValue = AnsiValue::new(10);
    /// `#FFFF00`
    pub const YELLOW: AnsiValue = AnsiValue::new(11);
    /// `#0000FF`
    pub const BLUE: AnsiValue = AnsiValue::new(12);
    /// `#FF00FF`
    pub const MAGENTA: AnsiValue = AnsiValue::new(13);
    /// `#00FFFF`
    pub const CYAN: AnsiValue = AnsiValue::new(14);
    /// `#FFFFFF`
    pub const WHITE: AnsiValue = AnsiValue::new(15);

    // 6x6x6 color cube (16-231).
    // 16: #000000, same as a standard color.
    /// `#00005F`
    pub const DARK_NAVY_BLUE: AnsiValue = AnsiValue::new(17);
    /// `#000087`
    pub const DARK_BLUE: AnsiValue = AnsiValue::new(18);
    /// `#0000AF`
    pub const ZAFFRE: AnsiValue = AnsiValue::new(19);
    /// `#0000D7`
    pub const MEDIUM_BLUE: AnsiValue = AnsiValue::new(20);
    // 21: #0000FF, same as a standard color.
    /// `#005F00`
    pub const DARK_GREEN: AnsiValue = AnsiValue::new(22);
    /// `#005F5F`
    pub const CARIBBEAN_CURRENT: AnsiValue = AnsiValue::new(23);
    /// `#005F87`
    pub const SEA_BLUE: AnsiValue = AnsiValue::new(24);
    /// `#005FAF`
    pub const LAPIS_LAZULI: AnsiValue = AnsiValue::new(25);
    /// `#005FD7`
    pub const TANG_BLUE: AnsiValue = AnsiValue::new(26);
    /// `#005FFF`
    pub const ULTRAMARINE_BLUE: AnsiValue = AnsiValue::new(27);
    /// `#008700`
    pub const IRISH_GREEN: AnsiValue = AnsiValue::new(28);
    /// `#00875F`
    pub const SEA_GREEN: AnsiValue = AnsiValue::new(29);
    /// `#008787`
    pub const DARK_CYAN: AnsiValue = AnsiValue::new(30);
    /// `#0087AF`
    pub const BLUE_NCS: AnsiValue = AnsiValue::new(31);
    /// `#0087D7`
    pub const GREEN_BLUE: AnsiValue = AnsiValue::new(32);
    /// `#0087FF`
    pub const BLEU_DE_FRANCE: AnsiValue = AnsiValue::new(33);
    /// `#00AF00`
    pub const ISLAMIC_GREEN: AnsiValue = AnsiValue::new(34);
    /// `#00AF5F`
    pub const PIGMENT_GREEN_CMYK_GREEN: AnsiValue = AnsiValue::new(35);
    /// `#00AF87`
    pub const JUNGLE_GREEN: AnsiValue = AnsiValue::new(36);
    /// `#00AFAF`
    pub const LIGHT_SEA_GREEN: AnsiValue = AnsiValue::new(37);
    /// `#00AFD7`
    pub const BRIGHT_CERULEAN: AnsiValue = AnsiValue::new(38);
    /// `#00AFFF`
    pub const DEEP_SKY_BLUE: AnsiValue = AnsiValue::new(39);
    /// `#00D700`
    pub const LIME: AnsiValue = AnsiValue::new(40);
    /// `#00D75F`
    pub const MALACHITE: AnsiValue = AnsiValue::new(41);
    /// `#00D787`
    pub const AQUA_GREEN: AnsiValue = AnsiValue::new(42);
    /// `#00D7AF`
    pub const CARIBBEAN_GREEN: AnsiValue = AnsiValue::new(43);
    /// `#00D7D7`
    pub const DARK_TURQUOISE: AnsiValue = AnsiValue::new(44);
    /// `#00D7FF`
    pub const BRIGHT_SKY_BLUE: AnsiValue = AnsiValue::new(45);
    // 46: #00FF00, same as a standard color.
    /// `#00FF5F`
    pub const ERIN: AnsiValue = AnsiValue::new(47);
    /// `#00FF87`
    pub const SPRING_GREEN: AnsiValue = AnsiValue::new(48);
    /// `#00FFAF`
    pub const MEDIUM_SPRING_GREEN: AnsiValue = AnsiValue::new(49);
    /// `#00FFD7`
    pub const BRIGHT_TURQUOISE: AnsiValue = AnsiValue::new(50);
    // 51: #00FFFF, same as a standard color.
    /// `#5F0000`
    pub const BLOOD_RED: AnsiValue = AnsiValue::new(52);
    /// `#5F005F`
    pub const TYRIAN_PURPLE: AnsiValue = AnsiValue::new(53);
    /// `#5F0087`
    pub const INDIGO: AnsiValue = AnsiValue::new(54);
    /// `#5F00AF`
    pub const DAISY_BUSH: AnsiValue = AnsiValue::new(55);
    /// `#5F00D7`
    pub const ELECTRIC_ULTRAMARINE: AnsiValue = AnsiValue::new(56);
    /// `#5F00FF`
    pub const HAN_PURPLE_CHINESE_PURPLE: AnsiValue = AnsiValue::new(57);
    /// `#5F5F00`
    pub const ANTIQUE_BRONZE: AnsiValue = AnsiValue::new(58);
    /// `#5F5F5F`
    pub const STORM_DUST: AnsiValue = AnsiValue::new(59);
    /// `#5F5F87`
    pub const PURPLE_NAVY: AnsiValue = AnsiValue::new(60);
    /// `#5F5FAF`
    pub const RICH_BLUE: AnsiValue = AnsiValue::new(61);
    /// `#5F5FD7`
    pub const SLATE_BLUE: AnsiValue = AnsiValue::new(62);
    /// `#5F5FFF`
    pub const NEBULA_BLUE: AnsiValue = AnsiValue::new(63);
    /// `#5F8700`
    pub const OLIVE_DRAB: AnsiValue = AnsiValue::new(64);
    /// `#5F875F`
    pub const RUSSIAN_GREEN: AnsiValue = AnsiValue::new(65);
    /// `#5F8787`
    pub const STEEL_TEAL: AnsiValue = AnsiValue::new(66);
    /// `#5F87AF`
    pub const AIR_FORCE_BLUE: AnsiValue = AnsiValue::new(67);
    /// `#5F87D7`
    pub const GLAUCOUS: AnsiValue = AnsiValue::new(68);
    /// `#5F87FF`
    pub const CORNFLOWER_BLUE: AnsiValue = AnsiValue::new(69);
    /// `#5FAF00`
    pub const KELLY_GREEN: AnsiValue = AnsiValue::new(70);
    /// `#5FAF5F`
    pub const FERN: AnsiValue = AnsiValue::new(71);
    /// `#5FAF87`
    pub const SHINY_SHAMROCK: AnsiValue = AnsiValue::new(72);
    /// `#5FAFAF`
    pub const VERDIGRIS: AnsiValue = AnsiValue::new(73);
    /// `#5FAFD7`
    pub const PICTON_BLUE: AnsiValue = AnsiValue::new(74);
    /// `#5FAFFF`
    pub const FRENCH_SKY_BLUE: AnsiValue = AnsiValue::new(75);
    /// `#5FD700`
    pub const LIME_GREEN: AnsiValue = AnsiValue::new(76);
    /// `#5FD75F`
    pub const PARIS_GREEN: AnsiValue = AnsiValue::new(77);
    /// `#5FD787`
    pub const UFO_GREEN: AnsiValue = AnsiValue::new(78);
    /// `#5FD7AF`
    pub const MEDIUM_AQUAMARINE: AnsiValue = AnsiValue::new(79);
    /// `#5FD7D7`
    pub const MEDIUM_TURQUOISE: AnsiValue = AnsiValue::new(80);
    /// `#5FD7FF`
    pub const VIVID_SKY_BLUE: AnsiValue = AnsiValue::new(81);
    /// `#5FFF00`
    pub const BRIGHT_GREEN: AnsiValue = AnsiValue::new(82);
    /// `#5FFF5F`
    pub const SCREAMIN_GREEN: AnsiValue = AnsiValue::new(83);
    /// `#5FFF87`
    pub const GUPPIE_GREEN: AnsiValue = AnsiValue::new(84);
    /// `#5FFFAF`
    pub const LIGHT_BLUISH_GREEN: AnsiValue = AnsiValue::new(85);
    /// `#5FFFD7`
    pub const BLUE_ZIRCON: AnsiValue = AnsiValue::new(86);
    /// `#5FFFFF`
    pub const AQUA: AnsiValue = AnsiValue::new(87);
    /// `#870000`
    pub const DARK_RED: AnsiValue = AnsiValue::new(88);
    /// `#87005F`
    pub const DARK_RASPBERRY: AnsiValue = AnsiValue::new(89);
    /// `#870087`
    pub const MARDI_GRAS_PURPLE: AnsiValue = AnsiValue::new(90);
    /// `#8700AF`
    pub const GRAPE: AnsiValue = AnsiValue::new(91);
    /// `#8700D7`
    pub const DARK_VIOLET: AnsiValue = AnsiValue::new(92);
    /// `#8700FF`
    pub const VIOLET_TRADITIONAL: AnsiValue = AnsiValue::new(93);
    /// `#875F00`
    pub const GOLDEN_BROWN: AnsiValue = AnsiValue::new(94);
    /// `#875F5F`
    pub const DEEP_TAUPE: AnsiValue = AnsiValue::new(95);
    /// `#875F87`
    pub const FRENCH_LILAC: AnsiValue = AnsiValue::new(96);
    /// `#875FAF`
    pub const DEEP_LILAC: AnsiValue = AnsiValue::new(97);
    /// `#875FD7`
    pub const MEDIUM_PURPLE: AnsiValue = AnsiValue::new(98);
    /// `#875FFF`
    pub const MEDIUM_SLATE_BLUE: AnsiValue = AnsiValue::new(99);
    /// `#878700`
    pub const SWAMP_GREEN: AnsiValue = AnsiValue::new(100);
    /// `#87875F`
    pub const DARK_TAN: AnsiValue = AnsiValue::new(101);
    /// `#878787`
    pub const BATTLESHIP_GRAY: AnsiValue = AnsiValue::new(102);
    /// `#8787AF`
    pub const WILD_BLUE_YONDER: AnsiValue = AnsiValue::new(103);
    /// `#8787D7`
    pub const PORTAGE: AnsiValue = AnsiValue::new(104);
    /// `#8787FF`
    pub const LIGHT_SLATE_BLUE: AnsiValue = AnsiValue::new(105);
    /// `#87AF00`
    pub const APPLE_GREEN: AnsiValue = AnsiValue::new(106);
    /// `#87AF5F`
    pub const OLIVINE: AnsiValue = AnsiValue::new(107);
    /// `#87AF87`
    pub const DARK_SEA_GREEN: AnsiValue = AnsiValue::new(108);
    /// `#87AFAF`
    pub const MORNING_SKY_BLUE: AnsiValue = AnsiValue::new(109);
    /// `#87AFD7`
    pub const RUDDY_BLUE: AnsiValue = AnsiValue::new(110);
    /// `#87AFFF`
    pub const JORDY_BLUE: AnsiValue = AnsiValue::new(111);
    /// `#87D700`
    pub const YELLOW_GREEN: AnsiValue = AnsiValue::new(112);
    /// `#87D75F`
    pub const PASTEL_GREEN: AnsiValue = AnsiValue::new(113);
    /// `#87D787`
    pub const GOSSIP: AnsiValue = AnsiValue::new(114);
    /// `#87D7AF`
    pub const ALGAE_GREEN: AnsiValue = AnsiValue::new(115);
    /// `#87D7D7`
    pub const MIDDLE_BLUE_GREEN: AnsiValue = AnsiValue::new(116);
    /// `#87D7FF`
    pub const BABY_BLUE: AnsiValue = AnsiValue::new(117);
    /// `#87FF00`
    pub const CHARTREUSE: AnsiValue = AnsiValue::new(118);
    /// `#87FF5F`
    pub const SCREAMIN_GREEN_ULTRA_GREEN: AnsiValue = AnsiValue::new(119);
    /// `#87FF87`
    pub const ULTRA_GREEN: AnsiValue = AnsiValue::new(120);
    /// `#87FFAF`
    pub const BRIGHT_MINT: AnsiValue = AnsiValue::new(121);
    /// `#87FFD7`
    pub const AQUAMARINE: AnsiValue = AnsiValue::new(122);
    /// `#87FFFF`
    pub const ELECTRIC_BLUE: AnsiValue = AnsiValue::new(123);
    /// `#AF0000`
    pub const TURKEY_RED: AnsiValue = AnsiValue::new(124);
    /// `#AF005F`
    pub const JAZZBERRY_JAM: AnsiValue = AnsiValue::new(125);
    /// `#AF0087`
    pub const FANDANGO: AnsiValue = AnsiValue::new(126);
    /// `#AF00AF`
    pub const PURPLE_MUNSELL: AnsiValue = AnsiValue::new(127);
    /// `#AF00D7`
    pub const DARK_ORCHID: AnsiValue = AnsiValue::new(128);
    /// `#AF00FF`
    pub const VERONICA: AnsiValue = AnsiValue::new(129);
    /// `#AF5F00`
    pub const GINGER: AnsiValue = AnsiValue::new(130);
    /// `#AF5F5F`
    pub const MIDDLE_RED_PURPLE: AnsiValue = AnsiValue::new(131);
    /// `#AF5F87`
    pub const PEARLY_PURPLE: AnsiValue = AnsiValue::new(132);
    /// `#AF5FAF`
    pub const DEEP_FUCHSIA: AnsiValue = AnsiValue::new(133);
    /// `#AF5FD7`
    pub const RICH_LILAC: AnsiValue = AnsiValue::new(134);
    /// `#AF5FFF`
    pub const LAVENDER_INDIGO: AnsiValue = AnsiValue::new(135);
    /// `#AF8700`
    pub const DARK_GOLDENROD: AnsiValue = AnsiValue::new(136);
    /// `#AF875F`
    pub const LIGHT_TAUPE: AnsiValue = AnsiValue::new(137);
    /// `#AF8787`
    pub const ROSY_BROWN: AnsiValue = AnsiValue::new(138);
    /// `#AF87AF`
    pub const OPERA_MAUVE: AnsiValue = AnsiValue::new(139);
    /// `#AF87D7`
    pub const LAVENDER_FLORAL: AnsiValue = AnsiValue::new(140);
    /// `#AF87FF`
    pub const TROPICAL_INDIGO: AnsiValue = AnsiValue::new(141);
    /// `#AFAF00`
    pub const OLIVE_YELLOW: AnsiValue = AnsiValue::new(142);
    /// `#AFAF5F`
    pub const OLIVE_GREEN: AnsiValue = AnsiValue::new(143);
    /// `#AFAF87`
    pub const MISTY_MOSS: AnsiValue = AnsiValue::new(144);
    /// `#AFAFAF`
    pub const NOBEL: AnsiValue = AnsiValue::new(145);
    /// `#AFAFD7`
    pub const MOON_RAKER: AnsiValue = AnsiValue::new(146);
    /// `#AFAFFF`
    pub const MAXIMUM_BLUE_PURPLE: AnsiValue = AnsiValue::new(147);
    /// `#AFD700`
    pub const INCHWORM: AnsiValue = AnsiValue::new(148);
    /// `#AFD75F`
    pub const JUNE_BUD: AnsiValue = AnsiValue::new(149);
    /// `#AFD787`
    pub const GRANNY_SMITH_APPLE: AnsiValue = AnsiValue::new(150);
    /// `#AFD7AF`
    pub const CELADON: AnsiValue = AnsiValue::new(151);
    /// `#AFD7D7`
    pub const POWDER_BLUE: AnsiValue = AnsiValue::new(152);
    /// `#AFD7FF`
    pub const PALE_CORNFLOWER_BLUE: AnsiValue = AnsiValue::new(153);
    /// `#AFFF00`
    pub const SPRING_BUD: AnsiValue = AnsiValue::new(154);
    /// `#AFFF5F`
    pub const FRENCH_LIME: AnsiValue = AnsiValue::new(155);
    /// `#AFFF87`
    pub const MINT_GREEN: AnsiValue = AnsiValue::new(156);
    /// `#AFFFAF`
    pub const PALE_GREEN: AnsiValue = AnsiValue::new(157);
    /// `#AFFFD7`
    pub const MAGIC_MINT: AnsiValue = AnsiValue::new(158);
    /// `#AFFFFF`
    pub const CELESTE: AnsiValue = AnsiValue::new(159);
    /// `#D70000`
    pub const RACING_RED_ROSSO_CORSA: AnsiValue = AnsiValue::new(160);
    /// `#D7005F`
    pub const DOGWOOD_ROSE: AnsiValue = AnsiValue::new(161);
    /// `#D70087`
    pub const VIVID_CERISE: AnsiValue = AnsiValue::new(162);
    /// `#D700AF`
    pub const BYZANTINE: AnsiValue = AnsiValue::new(163);
    /// `#D700D7`
    pub const STEEL_PINK: AnsiValue = AnsiValue::new(164);
    /// `#D700FF`
    pub const PSYCHEDELIC_PURPLE: AnsiValue = AnsiValue::new(165);
    /// `#D75F00`
    pub const COCOA_BROWN: AnsiValue = AnsiValue::new(166);
    /// `#D75F5F`
    pub const INDIAN_RED: AnsiValue = AnsiValue::new(167);
    /// `#D75F87`
    pub const CINNAMON_SATIN: AnsiValue = AnsiValue::new(168);
    /// `#D75FAF`
    pub const SKY_MAGENTA: AnsiValue = AnsiValue::new(169);
    /// `#D75FD7`
    pub const ORCHID: AnsiValue = AnsiValue::new(170);
    /// `#D75FFF`
    pub const HELIOTROPE: AnsiValue = AnsiValue::new(171);
    /// `#D78700`
    pub const HARVEST_GOLD: AnsiValue = AnsiValue::new(172);
    /// `#D7875F`
    pub const PALE_COPPER: AnsiValue = AnsiValue::new(173);
    /// `#D78787`
    pub const NEW_YORK_PINK: AnsiValue = AnsiValue::new(174);
    /// `#D787AF`
    pub const MIDDLE_PURPLE: AnsiValue = AnsiValue::new(175);
    /// `#D787D7`
    pub const PLUM: AnsiValue = AnsiValue::new(176);
    /// `#D787FF`
    pub const BRIGHT_LILAC: AnsiValue = AnsiValue::new(177);
    /// `#D7AF00`
    pub const NEON_GOLD: AnsiValue = AnsiValue::new(178);
    /// `#D7AF5F`
    pub const EARTH_YELLOW: AnsiValue = AnsiValue::new(179);
    /// `#D7AF87`
    pub const TAN: AnsiValue = AnsiValue::new(180);
    /// `#D7AFAF`
    pub const PALE_CHESTNUT: AnsiValue = AnsiValue::new(181);
    /// `#D7AFD7`
    pub const LILAC: AnsiValue = AnsiValue::new(182);
    /// `#D7AFFF`
    pub const MAUVE_MALLOW: AnsiValue = AnsiValue::new(183);
    /// `#D7D700`
    pub const PERIDOT: AnsiValue = AnsiValue::new(184);
    /// `#D7D75F`
    pub const STRAW: AnsiValue = AnsiValue::new(185);
    /// `#D7D787`
    pub const GREEN_EARTH_VERONA_GREEN: AnsiValue = AnsiValue::new(186);
    /// `#D7D7AF`
    pub const PALE_SPRING_BUD: AnsiValue = AnsiValue::new(187);
    /// `#D7D7D7`
    pub const TIMBERWOLF: AnsiValue = AnsiValue::new(188);
    /// `#D7D7FF`
    pub const LAVENDER_BLUE: AnsiValue = AnsiValue::new(189);
    /// `#D7FF00`
    pub const CHARTREUSE_YELLOW: AnsiValue = AnsiValue::new(190);
    /// `#D7FF5F`
    pub const FLUORESCENT_YELLOW: AnsiValue = AnsiValue::new(191);
    /// `#D7FF87`
    pub const KEY_LIME: AnsiValue = AnsiValue::new(192);
    /// `#D7FFAF`
    pub const CANARY: AnsiValue = AnsiValue::new(193);
    /// `#D7FFD7`
    pub const TEA_GREEN: AnsiValue = AnsiValue::new(194);
    /// `#D7FFFF`
    pub const LIGHT_CYAN: AnsiValue = AnsiValue::new(195);
    // 196: #FF0000, same as a standard color.
    /// `#FF005F`
    pub const RADICAL_RED: AnsiValue = AnsiValue::new(197);
    /// `#FF0087`
    pub const ROSE: AnsiValue = AnsiValue::new(198);
    /// `#FF00AF`
    pub const HOLLYWOOD_CERISE: AnsiValue = AnsiValue::new(199);
    /// `#FF00D7`
    pub const HOT_MAGENTA: AnsiValue = AnsiValue::new(200);
    // 201: #FF00FF, same as a standard color.
    /// `#FF5F00`
    pub const ORANGE_CRAYOLA: AnsiValue = AnsiValue::new(202);
    /// `#FF5F5F`
    pub const PASTEL_RED: AnsiValue = AnsiValue::new(203);
    /// `#FF5F87`
    pub const LIGHT_CRIMSON: AnsiValue = AnsiValue::new(204);
    /// `#FF5FAF`
    pub const HOT_PINK: AnsiValue = AnsiValue::new(205);
    /// `#FF5FD7`
    pub const ROSE_PINK: AnsiValue = AnsiValue::new(206);
    /// `#FF5FFF`
    pub const FLUORESCENT_PINK: AnsiValue = AnsiValue::new(207);
    /// `#FF8700`
    pub const DARK_ORANGE: AnsiValue = AnsiValue::new(208);
    /// `#FF875F`
    pub const CORAL: AnsiValue = AnsiValue::new(209);
    /// `#FF8787`
    pub const LIGHT_CORAL: AnsiValue = AnsiValue::new(210);
    /// `#FF87AF`
    pub const TICKLE_ME_PINK: AnsiValue = AnsiValue::new(211);
    /// `#FF87D7`
    pub const PALE_MAGENTA: AnsiValue = AnsiValue::new(212);
    /// `#FF87FF`
    pub const FUCHSIA_PINK: AnsiValue = AnsiValue::new(213);
    /// `#FFAF00`
    pub const BRIGHT_YELLOW: AnsiValue = AnsiValue::new(214);
    /// `#FFAF5F`
    pub const SANDY_BROWN: AnsiValue = AnsiValue::new(215);
    /// `#FFAF87`
    pub const LIGHT_SALMON: AnsiValue = AnsiValue::new(216);
    /// `#FFAFAF`
    pub const LIGHT_PINK: AnsiValue = AnsiValue::new(217);
    /// `#FFAFD7`
    pub const LAVENDER_PINK: AnsiValue = AnsiValue::new(218);
    /// `#FFAFFF`
    pub const ELECTRIC_LAVENDER: AnsiValue = AnsiValue::new(219);
    /// `#FFD700`
    pub const GOLD: AnsiValue = AnsiValue::new(220);
    /// `#FFD75F`
    pub const DANDELION: AnsiValue = AnsiValue::new(221);
    /// `#FFD787`
    pub const MEDIUM_YELLOW: AnsiValue = AnsiValue::new(222);
    /// `#FFD7AF`
    pub const LIGHT_ORANGE: AnsiValue = AnsiValue::new(223);
    /// `#FFD7D7`
    pub const PALE_PINK: AnsiValue = AnsiValue::new(224);
    /// `#FFD7FF`
    pub const PINK_LACE: AnsiValue = AnsiValue::new(225);
    // 226: #FFFF00, same as a standard color.
    /// `#FFFF5F`
    pub const LASER_LEMON: AnsiValue = AnsiValue::new(227);
    /// `#FFFF87`
    pub const PASTEL_YELLOW: AnsiValue = AnsiValue::new(228);
    /// `#FFFFAF`
    pub const LEMON_YELLOW: AnsiValue = AnsiValue::new(229);
    /// `#FFFFD7`
    pub const LIGHT_GOLDENROD_YELLOW: AnsiValue = AnsiValue::new(230);
    // 231: #FFFFFF, same as a standard color.

    // Grayscale ramp (232-255).
    /// `#080808`
    pub const ALMOST_BLACK: AnsiValue = AnsiValue::new(232);
    /// `#121212`
    pub const SMOKY_BLACK: AnsiValue = AnsiValue::new(233);
    /// `#1C1C1C`
    pub const NERO: AnsiValue = AnsiValue::new(234);
    /// `#262626`
    pub const EERIE_BLACK: AnsiValue = AnsiValue::new(235);
    /// `#303030`
    pub const DARK_CHARCOAL: AnsiValue = AnsiValue::new(236);
    /// `#3A3A3A`
    pub const JET_BLACK: AnsiValue = AnsiValue::new(237);
    /// `#444444`
    pub const ONYX: AnsiValue = AnsiValue::new(238);
    /// `#4E4E4E`
    pub const MATTERHORN: AnsiValue = AnsiValue::new(239);
    /// `#585858`
    pub const DAVYS_GRAY: AnsiValue = AnsiValue::new(240);
    /// `#626262`
    pub const GRANITE_GRAY: AnsiValue = AnsiValue::new(241);
    /// `#6C6C6C`
    pub const DIM_GRAY: AnsiValue = AnsiValue::new(242);
    /// `#767676`
    pub const NICKEL: AnsiValue = AnsiValue::new(243);
    // 244: #808080, same as a standard color.
    /// `#8A8A8A`
    pub const ALUMINIUM: AnsiValue = AnsiValue::new(245);
    /// `#949494`
    pub const SUVA_GREY: AnsiValue = AnsiValue::new(246);
    /// `#9E9E9E`
    pub const SPANISH_GRAY: AnsiValue = AnsiValue::new(247);
    /// `#A8A8A8`
    pub const GRAY_CHATEAU: AnsiValue = AnsiValue::new(248);
    /// `#B2B2B2`
    pub const DARK_GRAY: AnsiValue = AnsiValue::new(249);
    /// `#BCBCBC`
    pub const MEDIUM_GRAY: AnsiValue = AnsiValue::new(250);
    /// `#C6C6C6`
    pub const NEON_SILVER: AnsiValue = AnsiValue::new(251);
    /// `#D0D0D0`
    pub const LIGHT_GRAY: AnsiValue = AnsiValue::new(252);
    /// `#DADADA`
    pub const GAINSBORO: AnsiValue = AnsiValue::new(253);
    /// `#E4E4E4`
    pub const PLATINUM: AnsiValue = AnsiValue::new(254);
    /// `#EEEEEE`
    pub const ANTI_FLASH_WHITE: AnsiValue = AnsiValue::new(255);
}
