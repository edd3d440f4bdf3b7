//! Elemental types, move splits and the type chart.

use serde::{Deserialize, Serialize};

/// Multipliers are UQ4.12 fixed point: 0x1000 is 1.0.
pub const UQ_4_12_ONE: u16 = 0x1000;

const IMMUNE: u16 = 0;
const RESIST: u16 = UQ_4_12_ONE / 2;
const WEAK: u16 = UQ_4_12_ONE * 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    /// The "???" type. Neutral against and from everything.
    Mystery,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl Type {
    pub const ALL: [Type; 19] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Mystery,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "NORMAL",
            Type::Fighting => "FIGHT",
            Type::Flying => "FLYING",
            Type::Poison => "POISON",
            Type::Ground => "GROUND",
            Type::Rock => "ROCK",
            Type::Bug => "BUG",
            Type::Ghost => "GHOST",
            Type::Steel => "STEEL",
            Type::Mystery => "???",
            Type::Fire => "FIRE",
            Type::Water => "WATER",
            Type::Grass => "GRASS",
            Type::Electric => "ELECTR",
            Type::Psychic => "PSYCHC",
            Type::Ice => "ICE",
            Type::Dragon => "DRAGON",
            Type::Dark => "DARK",
            Type::Fairy => "FAIRY",
        }
    }

    /// OBJ palette the type icon is drawn with. The icon sheet packs its
    /// colours into three palettes shared by groups of types.
    pub fn icon_palette(self) -> u8 {
        match self {
            Type::Normal
            | Type::Fighting
            | Type::Ground
            | Type::Rock
            | Type::Steel
            | Type::Fire
            | Type::Electric
            | Type::Dark => 13,
            Type::Flying
            | Type::Poison
            | Type::Ghost
            | Type::Water
            | Type::Psychic
            | Type::Ice
            | Type::Fairy => 14,
            Type::Bug | Type::Mystery | Type::Grass | Type::Dragon => 15,
        }
    }

    /// Animation frame of this type in the type icon sheet.
    pub fn icon_frame(self) -> u8 {
        self as u8
    }

    pub fn from_icon_frame(frame: u8) -> Option<Type> {
        Type::ALL.get(frame as usize).copied()
    }
}

/// Damage category of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Split {
    Physical,
    Special,
    Status,
}

impl Split {
    pub fn icon_frame(self) -> u8 {
        self as u8
    }

    pub fn from_icon_frame(frame: u8) -> Option<Split> {
        [Split::Physical, Split::Special, Split::Status]
            .get(frame as usize)
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Split::Physical => "PHYS",
            Split::Special => "SPEC",
            Split::Status => "STAT",
        }
    }
}

/// Multiplier of `attacking` against a single defending type.
pub fn type_modifier(attacking: Type, defending: Type) -> u16 {
    use Type::*;

    match (attacking, defending) {
        (Normal, Rock | Steel) => RESIST,
        (Normal, Ghost) => IMMUNE,

        (Fighting, Normal | Rock | Steel | Ice | Dark) => WEAK,
        (Fighting, Flying | Poison | Bug | Psychic | Fairy) => RESIST,
        (Fighting, Ghost) => IMMUNE,

        (Flying, Fighting | Bug | Grass) => WEAK,
        (Flying, Rock | Steel | Electric) => RESIST,

        (Poison, Grass | Fairy) => WEAK,
        (Poison, Poison | Ground | Rock | Ghost) => RESIST,
        (Poison, Steel) => IMMUNE,

        (Ground, Poison | Rock | Steel | Fire | Electric) => WEAK,
        (Ground, Bug | Grass) => RESIST,
        (Ground, Flying) => IMMUNE,

        (Rock, Flying | Bug | Fire | Ice) => WEAK,
        (Rock, Fighting | Ground | Steel) => RESIST,

        (Bug, Grass | Psychic | Dark) => WEAK,
        (Bug, Fighting | Flying | Poison | Ghost | Steel | Fire | Fairy) => RESIST,

        (Ghost, Ghost | Psychic) => WEAK,
        (Ghost, Dark) => RESIST,
        (Ghost, Normal) => IMMUNE,

        (Steel, Rock | Ice | Fairy) => WEAK,
        (Steel, Steel | Fire | Water | Electric) => RESIST,

        (Fire, Bug | Steel | Grass | Ice) => WEAK,
        (Fire, Rock | Fire | Water | Dragon) => RESIST,

        (Water, Ground | Rock | Fire) => WEAK,
        (Water, Water | Grass | Dragon) => RESIST,

        (Grass, Ground | Rock | Water) => WEAK,
        (Grass, Flying | Poison | Bug | Steel | Fire | Grass | Dragon) => RESIST,

        (Electric, Flying | Water) => WEAK,
        (Electric, Grass | Electric | Dragon) => RESIST,
        (Electric, Ground) => IMMUNE,

        (Psychic, Fighting | Poison) => WEAK,
        (Psychic, Steel | Psychic) => RESIST,
        (Psychic, Dark) => IMMUNE,

        (Ice, Flying | Ground | Grass | Dragon) => WEAK,
        (Ice, Steel | Fire | Water | Ice) => RESIST,

        (Dragon, Dragon) => WEAK,
        (Dragon, Steel) => RESIST,
        (Dragon, Fairy) => IMMUNE,

        (Dark, Ghost | Psychic) => WEAK,
        (Dark, Fighting | Dark | Fairy) => RESIST,

        (Fairy, Fighting | Dragon | Dark) => WEAK,
        (Fairy, Poison | Steel | Fire) => RESIST,

        _ => UQ_4_12_ONE,
    }
}
