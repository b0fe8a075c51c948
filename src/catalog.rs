//! Built-in level categories.

use once_cell::sync::Lazy;

use crate::content::{Level, WordEntry};

pub const DEFAULT_CATEGORY: &str = "general";

/// A named group of levels offered on the category screen.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub levels: Vec<Level>,
}

fn level(ordinal: u32, words: &[(&str, &str, &str)]) -> Level {
    Level::new(
        ordinal,
        words
            .iter()
            .map(|(word, clue, definition)| WordEntry::new(word, clue, definition))
            .collect(),
    )
}

static BUILTIN: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category {
            id: DEFAULT_CATEGORY.into(),
            title: "General".into(),
            levels: vec![
                level(
                    1,
                    &[
                        ("DOG", "A loyal pet that barks", "A domesticated carnivorous mammal."),
                        ("CAT", "Feline pet that purrs", "A small domesticated carnivorous mammal."),
                        ("SUN", "Source of daylight", "The star around which the earth orbits."),
                    ],
                ),
                level(
                    2,
                    &[
                        ("APPLE", "Fruit that keeps doctors away", "A sweet, red or green fruit."),
                        ("BEACH", "Sandy shore by the ocean", "A pebbly or sandy shore by the ocean."),
                        ("CLOUD", "Floats in the sky", "A visible mass of condensed water vapor."),
                    ],
                ),
                level(
                    3,
                    &[
                        ("ELEPHANT", "Large gray mammal with trunk", "A very large herbivorous mammal."),
                        ("MOUNTAIN", "Tall natural elevation", "A large natural elevation of the earth's surface."),
                        ("HOSPITAL", "Place for medical treatment", "An institution providing medical treatment."),
                        ("BUTTERFLY", "Flying insect with colorful wings", "A nectar-feeding insect with large wings."),
                    ],
                ),
            ],
        },
        Category {
            id: "animals".into(),
            title: "Animals".into(),
            levels: vec![
                level(
                    1,
                    &[
                        ("COW", "Farm animal that gives milk", "A mature female of domestic cattle."),
                        ("OWL", "Wise bird of the night", "A nocturnal bird of prey with large eyes."),
                        ("PIG", "Pink farm animal", "A domesticated omnivorous mammal with a snout."),
                    ],
                ),
                level(
                    2,
                    &[
                        ("TIGER", "Striped big cat", "A large wild cat with a striped coat."),
                        ("HORSE", "Animal you can ride", "A large hoofed mammal used for riding."),
                        ("SHEEP", "Gives us wool", "A domesticated ruminant kept for wool and meat."),
                    ],
                ),
                level(
                    3,
                    &[
                        ("GIRAFFE", "Tallest land animal", "An African mammal with a very long neck."),
                        ("DOLPHIN", "Clever sea mammal", "A small toothed whale with a beak-like snout."),
                        ("PENGUIN", "Bird that cannot fly but swims", "A flightless seabird of the southern hemisphere."),
                    ],
                ),
            ],
        },
        Category {
            id: "nature".into(),
            title: "Nature".into(),
            levels: vec![
                level(
                    1,
                    &[
                        ("SEA", "Large body of salt water", "The expanse of salt water covering much of the earth."),
                        ("ICE", "Frozen water", "Water frozen into a solid state."),
                        ("OAK", "Tree that grows acorns", "A tree bearing acorns as fruit."),
                    ],
                ),
                level(
                    2,
                    &[
                        ("RIVER", "Flowing water to the sea", "A large natural stream of water."),
                        ("STORM", "Thunder and lightning", "A violent disturbance of the atmosphere."),
                        ("FLOWER", "Blooms in spring", "The seed-bearing part of a plant."),
                    ],
                ),
                level(
                    3,
                    &[
                        ("VOLCANO", "Mountain that erupts", "A mountain with a vent for lava and gas."),
                        ("RAINBOW", "Colors after rain", "An arch of colors formed by light in raindrops."),
                        ("GLACIER", "Slow river of ice", "A slowly moving mass of ice on land."),
                    ],
                ),
            ],
        },
    ]
});

/// All built-in categories in display order.
pub fn builtin() -> &'static [Category] {
    &BUILTIN
}

pub fn find(id: &str) -> Option<&'static Category> {
    BUILTIN.iter().find(|c| c.id == id)
}

/// The level list used whenever external content cannot be loaded.
pub fn default_levels() -> Vec<Level> {
    find(DEFAULT_CATEGORY)
        .map(|c| c.levels.clone())
        .unwrap_or_default()
}
