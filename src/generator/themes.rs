//! Themed word lists for word-based generation
//!
//! Four built-in themes, each an adjective list and a noun list. Words keep
//! their stored capitalization so the Original case rule has something to
//! preserve.

/// A named pair of word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTheme {
    pub name: &'static str,
    pub adjectives: &'static [&'static str],
    pub nouns: &'static [&'static str],
}

impl WordTheme {
    /// Raw candidate-space size: adjectives x nouns
    pub fn pairs(&self) -> usize {
        self.adjectives.len() * self.nouns.len()
    }
}

/// General-purpose adjectives for the default theme
const DEFAULT_ADJECTIVES: &[&str] = &[
    // Temperament
    "Quick", "Lazy", "Sleepy", "Nosy", "Hungry", "Clever", "Brave", "Shy",
    "Silent", "Happy", "Grumpy", "Lucky", "Eager", "Gentle", "Proud", "Silly",
    "Witty", "Zany",
    // Texture and size
    "Fuzzy", "Smooth", "Shiny", "Vast", "Tiny", "Icy", "Cozy",
    // Mood and color
    "Wild", "Calm", "Dark", "Bright", "Golden", "Rusty", "Hidden", "Ancient",
    // Flavor
    "Spectral", "Cosmic", "Digital", "Quantum", "Arctic", "Urban", "Mystic",
];

/// General-purpose nouns for the default theme
const DEFAULT_NOUNS: &[&str] = &[
    // Animals
    "Fox", "Dog", "Cat", "Panda", "Tiger", "Lion", "Wolf", "Bear", "Rabbit",
    "Snake", "Eagle", "Shark", "Whale", "Squid",
    // Figures
    "Robot", "Ghost", "Ninja", "Wizard",
    // Nature and space
    "River", "Mountain", "Forest", "Desert", "Ocean", "Planet", "Star",
    "Comet",
    // Everything else
    "Shadow", "Cipher", "Riddle", "Key", "Stone", "Echo", "Byte", "Nebula",
    "Droid", "Portal", "Dragon", "Elf", "Oracle", "Nomad", "Glacier",
];

const FANTASY_ADJECTIVES: &[&str] = &[
    "Ancient", "Mystic", "Shadow", "Fell", "Noble", "Brave", "Grim", "Silent",
    "Golden", "Forgotten", "Whispering", "Iron", "Elven", "Dwarven",
];

const FANTASY_NOUNS: &[&str] = &[
    "Dragon", "Knight", "Castle", "Sword", "Spell", "Scroll", "Rune", "Goblin",
    "Orc", "Elf", "Dwarf", "Wizard", "Sorcerer", "Throne", "Quest", "Gate",
];

const SCIFI_ADJECTIVES: &[&str] = &[
    "Cosmic", "Quantum", "Digital", "Astro", "Robotic", "Cyber", "Laser",
    "Plasma", "Future", "Android", "Stellar", "Void", "Hyper", "Galactic",
];

const SCIFI_NOUNS: &[&str] = &[
    "Nebula", "Droid", "Starship", "Planet", "Comet", "Wormhole", "Blaster",
    "Forcefield", "Data", "Pilot", "Explorer", "Alien", "Cyborg", "Station",
    "Core",
];

const NATURE_ADJECTIVES: &[&str] = &[
    "Silent", "Wild", "Green", "Ancient", "Whispering", "Sunlit", "Misty",
    "Stone", "River", "Forest", "Mountain", "Arctic", "Desert", "Coastal",
    "Verdant",
];

const NATURE_NOUNS: &[&str] = &[
    "Wolf", "Eagle", "River", "Stone", "Peak", "Forest", "Grove", "Creek",
    "Flower", "Leaf", "Tree", "Root", "Moss", "Fauna", "Flora", "Canyon",
];

static THEMES: &[WordTheme] = &[
    WordTheme {
        name: "Default",
        adjectives: DEFAULT_ADJECTIVES,
        nouns: DEFAULT_NOUNS,
    },
    WordTheme {
        name: "Fantasy",
        adjectives: FANTASY_ADJECTIVES,
        nouns: FANTASY_NOUNS,
    },
    WordTheme {
        name: "Sci-Fi",
        adjectives: SCIFI_ADJECTIVES,
        nouns: SCIFI_NOUNS,
    },
    WordTheme {
        name: "Nature",
        adjectives: NATURE_ADJECTIVES,
        nouns: NATURE_NOUNS,
    },
];

/// Look up a theme by name, case-insensitively
pub fn theme(name: &str) -> Option<&'static WordTheme> {
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Built-in theme names, in registry order
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|t| t.name).collect()
}
