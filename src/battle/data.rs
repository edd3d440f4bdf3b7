//! Static move data and the combatants the menu is shown for.

use serde::{Deserialize, Serialize};

use super::types::{Split, Type};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    None,
    Levitate,
    VoltAbsorb,
    WaterAbsorb,
    FlashFire,
    WonderGuard,
    Static,
    Overgrow,
    Blaze,
    Torrent,
}

impl Ability {
    /// Type this ability makes its holder immune to, if any.
    pub fn immunity(self) -> Option<Type> {
        match self {
            Ability::Levitate => Some(Type::Ground),
            Ability::VoltAbsorb => Some(Type::Electric),
            Ability::WaterAbsorb => Some(Type::Water),
            Ability::FlashFire => Some(Type::Fire),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveId {
    Tackle,
    Thunderbolt,
    Earthquake,
    ThunderWave,
    Surf,
    Flamethrower,
    ShadowBall,
    IceBeam,
    Swift,
    SeismicToss,
    SwordsDance,
    RazorLeaf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MoveData {
    pub name: &'static str,
    pub power: u8,
    /// 0 means the move never misses.
    pub accuracy: u8,
    pub pp: u8,
    pub move_type: Type,
    pub split: Split,
    pub description: &'static str,
}

impl MoveId {
    pub fn data(self) -> MoveData {
        match self {
            MoveId::Tackle => MoveData {
                name: "TACKLE",
                power: 40,
                accuracy: 100,
                pp: 35,
                move_type: Type::Normal,
                split: Split::Physical,
                description: "Charges the foe with a full-body tackle.",
            },
            MoveId::Thunderbolt => MoveData {
                name: "THUNDERBOLT",
                power: 90,
                accuracy: 100,
                pp: 15,
                move_type: Type::Electric,
                split: Split::Special,
                description: "A strong electrical attack that may paralyze the foe.",
            },
            MoveId::Earthquake => MoveData {
                name: "EARTHQUAKE",
                power: 100,
                accuracy: 100,
                pp: 10,
                move_type: Type::Ground,
                split: Split::Physical,
                description: "A powerful quake, but has no effect on flying foes.",
            },
            MoveId::ThunderWave => MoveData {
                name: "THUNDER WAVE",
                power: 0,
                accuracy: 90,
                pp: 20,
                move_type: Type::Electric,
                split: Split::Status,
                description: "A weak jolt of electricity that paralyzes the foe.",
            },
            MoveId::Surf => MoveData {
                name: "SURF",
                power: 90,
                accuracy: 100,
                pp: 15,
                move_type: Type::Water,
                split: Split::Special,
                description: "Creates a huge wave, then crashes it down on the foe.",
            },
            MoveId::Flamethrower => MoveData {
                name: "FLAMETHROWER",
                power: 90,
                accuracy: 100,
                pp: 15,
                move_type: Type::Fire,
                split: Split::Special,
                description: "A powerful fire attack that may inflict a burn.",
            },
            MoveId::ShadowBall => MoveData {
                name: "SHADOW BALL",
                power: 80,
                accuracy: 100,
                pp: 15,
                move_type: Type::Ghost,
                split: Split::Special,
                description: "Hurls a black blob that may lower the foe's SP. DEF.",
            },
            MoveId::IceBeam => MoveData {
                name: "ICE BEAM",
                power: 90,
                accuracy: 100,
                pp: 10,
                move_type: Type::Ice,
                split: Split::Special,
                description: "Blasts the foe with an icy beam that may freeze it.",
            },
            MoveId::Swift => MoveData {
                name: "SWIFT",
                power: 60,
                accuracy: 0,
                pp: 20,
                move_type: Type::Normal,
                split: Split::Special,
                description: "Sprays star-shaped rays that never miss.",
            },
            MoveId::SeismicToss => MoveData {
                name: "SEISMIC TOSS",
                power: 0,
                accuracy: 100,
                pp: 20,
                move_type: Type::Fighting,
                split: Split::Physical,
                description: "Inflicts damage identical to the user's level.",
            },
            MoveId::SwordsDance => MoveData {
                name: "SWORDS DANCE",
                power: 0,
                accuracy: 0,
                pp: 30,
                move_type: Type::Normal,
                split: Split::Status,
                description: "A fighting dance that sharply raises ATTACK.",
            },
            MoveId::RazorLeaf => MoveData {
                name: "RAZOR LEAF",
                power: 55,
                accuracy: 95,
                pp: 25,
                move_type: Type::Grass,
                split: Split::Physical,
                description: "Cuts the enemy with leaves. High critical-hit ratio.",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

/// One active combatant.
#[derive(Clone, Debug, PartialEq)]
pub struct Battler {
    pub name: &'static str,
    pub level: u8,
    pub types: [Type; 2],
    pub ability: Ability,
    pub stats: Stats,
    pub max_hp: u16,
    pub hp: u16,
    /// Speed stat stage, -6..=6.
    pub speed_stage: i8,
    pub moves: Vec<MoveId>,
    pub pp: Vec<u8>,
}

impl Battler {
    pub fn new(
        name: &'static str,
        level: u8,
        types: [Type; 2],
        ability: Ability,
        stats: Stats,
        max_hp: u16,
        moves: Vec<MoveId>,
    ) -> Self {
        let pp = moves.iter().map(|m| m.data().pp).collect();
        Self {
            name,
            level,
            types,
            ability,
            stats,
            max_hp,
            hp: max_hp,
            speed_stage: 0,
            moves,
            pp,
        }
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }
}

pub fn pikachu() -> Battler {
    Battler::new(
        "PIKACHU",
        50,
        [Type::Electric, Type::Electric],
        Ability::Static,
        Stats {
            attack: 75,
            defense: 60,
            speed: 110,
            sp_attack: 70,
            sp_defense: 70,
        },
        110,
        vec![MoveId::Thunderbolt, MoveId::Surf, MoveId::ThunderWave, MoveId::Swift],
    )
}

pub fn gengar() -> Battler {
    Battler::new(
        "GENGAR",
        50,
        [Type::Ghost, Type::Poison],
        Ability::Levitate,
        Stats {
            attack: 85,
            defense: 80,
            speed: 130,
            sp_attack: 150,
            sp_defense: 95,
        },
        135,
        vec![MoveId::ShadowBall, MoveId::Thunderbolt, MoveId::IceBeam, MoveId::SeismicToss],
    )
}

pub fn swampert() -> Battler {
    Battler::new(
        "SWAMPERT",
        50,
        [Type::Water, Type::Ground],
        Ability::Torrent,
        Stats {
            attack: 130,
            defense: 110,
            speed: 80,
            sp_attack: 105,
            sp_defense: 110,
        },
        175,
        vec![MoveId::Earthquake, MoveId::Surf, MoveId::IceBeam, MoveId::Tackle],
    )
}

pub fn shedinja() -> Battler {
    Battler::new(
        "SHEDINJA",
        50,
        [Type::Bug, Type::Ghost],
        Ability::WonderGuard,
        Stats {
            attack: 110,
            defense: 65,
            speed: 60,
            sp_attack: 50,
            sp_defense: 50,
        },
        1,
        vec![MoveId::ShadowBall, MoveId::SwordsDance, MoveId::Tackle, MoveId::RazorLeaf],
    )
}

pub fn sceptile() -> Battler {
    Battler::new(
        "SCEPTILE",
        50,
        [Type::Grass, Type::Grass],
        Ability::Overgrow,
        Stats {
            attack: 105,
            defense: 85,
            speed: 140,
            sp_attack: 125,
            sp_defense: 105,
        },
        145,
        vec![MoveId::RazorLeaf, MoveId::Earthquake, MoveId::SwordsDance, MoveId::Tackle],
    )
}
