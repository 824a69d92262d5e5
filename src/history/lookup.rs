//! Static ID → name tables for queues, summoner spells, runes and positions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QueueKind {
    RankedSolo,
    RankedFlex,
    Normal,
    Aram,
    Other,
}

impl QueueKind {
    pub fn from_queue_id(queue_id: u16) -> Self {
        match queue_id {
            420 => QueueKind::RankedSolo,
            440 => QueueKind::RankedFlex,
            400 | 430 => QueueKind::Normal,
            450 => QueueKind::Aram,
            _ => QueueKind::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueueKind::RankedSolo => "Ranked solo/duo",
            QueueKind::RankedFlex => "Ranked flex",
            QueueKind::Normal => "Normal",
            QueueKind::Aram => "ARAM",
            QueueKind::Other => "Other",
        }
    }
}

/// Long-form queue names used on the match scoreboard.
pub fn queue_name(queue_id: u16) -> Option<&'static str> {
    let name = match queue_id {
        420 => "Ranked Solo/Duo",
        440 => "Ranked Flex",
        450 => "ARAM",
        400 => "Normal Draft",
        430 => "Normal Blind",
        700 => "Clash",
        830 => "Co-op vs AI Intro",
        840 => "Co-op vs AI Beginner",
        850 => "Co-op vs AI Intermediate",
        _ => return None,
    };
    Some(name)
}

/// Trinkets and support items shown apart from the build.
pub const VISION_ITEM_IDS: [u32; 5] = [3340, 3363, 3364, 2055, 4642];

pub fn is_vision_item(item_id: u32) -> bool {
    VISION_ITEM_IDS.contains(&item_id)
}

pub fn summoner_spell_name(spell_id: u32) -> Option<&'static str> {
    let name = match spell_id {
        1 => "Cleanse",
        3 => "Exhaust",
        4 => "Flash",
        6 => "Ghost",
        7 => "Heal",
        11 => "Smite",
        12 => "Teleport",
        13 => "Clarity",
        14 => "Ignite",
        21 => "Barrier",
        32 => "Snowball",
        54 => "Placeholder",
        _ => return None,
    };
    Some(name)
}

pub fn rune_name(rune_id: u32) -> Option<&'static str> {
    let name = match rune_id {
        // Trees
        8000 => "Precision",
        8100 => "Domination",
        8200 => "Sorcery",
        8300 => "Inspiration",
        8400 => "Resolve",
        // Precision
        8005 => "Press the Attack",
        8008 => "Lethal Tempo",
        8010 => "Conqueror",
        8021 => "Fleet Footwork",
        8009 => "Presence of Mind",
        9111 => "Triumph",
        9104 => "Legend: Alacrity",
        9103 => "Legend: Bloodline",
        8014 => "Coup de Grace",
        8017 => "Cut Down",
        8299 => "Last Stand",
        // Domination
        8112 => "Electrocute",
        8128 => "Dark Harvest",
        9923 => "Hail of Blades",
        8126 => "Cheap Shot",
        8139 => "Taste of Blood",
        8143 => "Sudden Impact",
        8136 => "Zombie Ward",
        8120 => "Ghost Poro",
        8138 => "Eyeball Collection",
        8135 => "Treasure Hunter",
        8105 => "Relentless Hunter",
        8106 => "Ultimate Hunter",
        // Sorcery
        8214 => "Summon Aery",
        8229 => "Arcane Comet",
        8230 => "Phase Rush",
        8224 => "Nullifying Orb",
        8226 => "Manaflow Band",
        8275 => "Nimbus Cloak",
        8210 => "Transcendence",
        8234 => "Celerity",
        8233 => "Absolute Focus",
        8237 => "Scorch",
        8232 => "Waterwalking",
        8236 => "Gathering Storm",
        // Resolve
        8437 => "Grasp of the Undying",
        8439 => "Aftershock",
        8465 => "Guardian",
        8446 => "Demolish",
        8463 => "Font of Life",
        8401 => "Shield Bash",
        8429 => "Conditioning",
        8444 => "Second Wind",
        8473 => "Bone Plating",
        8451 => "Overgrowth",
        8453 => "Revitalize",
        8242 => "Unflinching",
        // Inspiration
        8351 => "Glacial Augment",
        8360 => "Unsealed Spellbook",
        8369 => "First Strike",
        8306 => "Hextech Flashtraption",
        8304 => "Magical Footwear",
        8345 => "Biscuit Delivery",
        8347 => "Cosmic Insight",
        8410 => "Approach Velocity",
        8352 => "Time Warp Tonic",
        _ => return None,
    };
    Some(name)
}

/// Scoreboard label for a team/individual position.
pub fn position_label(position: &str) -> String {
    match position.to_ascii_uppercase().as_str() {
        "TOP" => "Toplane".to_string(),
        "JUNGLE" => "Jungle".to_string(),
        "MIDDLE" => "Midlane".to_string(),
        "BOTTOM" => "Botlane".to_string(),
        "UTILITY" => "Support".to_string(),
        "INVALID" | "" => "N/A".to_string(),
        _ => position.to_string(),
    }
}
