use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{decode_spec, RGB};
use crate::table::ColorTable;

/// A request for a tab color, as it comes off the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Already a concrete color; passed through.
    Predecoded(RGB),
    /// Color explicitly turned off.
    Disabled,
    /// Color flag given without a value.
    Unset,
    /// Any user-supplied string, including the `random` and `RANDOM` sentinels.
    Named(String),
}

/// Which resolution rule produced a color. `Display` gives the label shown
/// with `--verbose`.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Predecoded,
    Hashed(String),
    Random(String),
    RandomRgb(RGB),
    Decoded(String),
    Guessed(String),
    RandomlyPicked {
        name: String,
        candidates: Vec<String>,
    },
    Default {
        spec: String,
        requested: String,
    },
    Picked(String),
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Predecoded => write!(f, "predecoded"),
            Choice::Hashed(name) => write!(f, "hashed color: {}", name),
            Choice::Random(name) => write!(f, "random color: {}", name),
            Choice::RandomRgb(rgb) => write!(f, "RANDOM color: {}", rgb),
            Choice::Decoded(spec) => write!(f, "decoded: {}", spec),
            Choice::Guessed(name) => write!(f, "guessing: {}", name),
            Choice::RandomlyPicked { name, .. } => write!(f, "randomly picked: {}", name),
            Choice::Default { spec, .. } => write!(f, "using default: {}", spec),
            Choice::Picked(name) => write!(f, "picked color: {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub rgb: RGB,
    pub choice: Choice,
}

/// Deterministic string hash used to pick hashed colors.
///
/// djb2 with xor, walking the UTF-16 code units from last to first, in
/// wrapping 32-bit arithmetic. Stable across runs and platforms.
pub fn string_hash(s: &str) -> u32 {
    let units: Vec<u16> = s.encode_utf16().collect();
    units
        .iter()
        .rev()
        .fold(5381u32, |hash, &unit| hash.wrapping_mul(33) ^ u32::from(unit))
}

/// Turns color requests into colors against one effective table.
///
/// Holds everything resolution needs: the table, its sorted names, the
/// optional hash seed, the random source, and the hash function.
pub struct Resolver<'a, R> {
    table: &'a ColorTable,
    names: Vec<&'a str>,
    hash_seed: Option<String>,
    hash: fn(&str) -> u32,
    rng: R,
}

impl<'a, R: Rng> Resolver<'a, R> {
    pub fn new(table: &'a ColorTable, hash_seed: Option<String>, rng: R) -> Result<Self, String> {
        if table.is_empty() {
            return Err("Error: color table is empty".to_string());
        }
        Ok(Resolver {
            table,
            names: table.names(),
            hash_seed,
            hash: string_hash,
            rng,
        })
    }

    /// Replace the hash function used for hashed picks.
    #[cfg(test)]
    pub fn with_hash(mut self, hash: fn(&str) -> u32) -> Self {
        self.hash = hash;
        self
    }

    /// Resolve a request to a color.
    ///
    /// Returns `None` only for `Request::Disabled`; every other request
    /// resolves, falling back to the `default` color.
    pub fn resolve(&mut self, request: Request) -> Option<Resolution> {
        let name = match request {
            Request::Predecoded(rgb) => {
                return Some(Resolution {
                    rgb,
                    choice: Choice::Predecoded,
                })
            }
            Request::Disabled => return None,
            Request::Unset => match &self.hash_seed {
                Some(seed) => {
                    let name = self.hashed_name(seed);
                    return Some(Resolution {
                        rgb: self.color_of(name),
                        choice: Choice::Hashed(name.to_string()),
                    });
                }
                None => "random".to_string(),
            },
            Request::Named(name) => name,
        };

        Some(self.resolve_name(name))
    }

    fn resolve_name(&mut self, name: String) -> Resolution {
        if name == "random" {
            let picked = Self::random_name(&mut self.rng, &self.names);
            return Resolution {
                rgb: self.color_of(picked),
                choice: Choice::Random(picked.to_string()),
            };
        }

        if name == "RANDOM" {
            let rgb = RGB::new(
                self.rng.gen_range(0..=255),
                self.rng.gen_range(0..=255),
                self.rng.gen_range(0..=255),
            );
            return Resolution {
                rgb,
                choice: Choice::RandomRgb(rgb),
            };
        }

        let name = name.to_lowercase();
        if let Some(rgb) = decode_spec(&name, self.table) {
            return Resolution {
                rgb,
                choice: Choice::Decoded(name),
            };
        }

        let candidates: Vec<&'a str> = self
            .names
            .iter()
            .copied()
            .filter(|candidate| candidate.contains(name.as_str()))
            .collect();

        match candidates.as_slice() {
            [] => Resolution {
                rgb: self.table.default_rgb(),
                choice: Choice::Default {
                    spec: self.table.default_spec().to_string(),
                    requested: name,
                },
            },
            [only] => Resolution {
                rgb: self.color_of(only),
                choice: Choice::Guessed(only.to_string()),
            },
            _ => {
                let picked = Self::random_name(&mut self.rng, &candidates);
                Resolution {
                    rgb: self.color_of(picked),
                    choice: Choice::RandomlyPicked {
                        name: picked.to_string(),
                        candidates: candidates.iter().map(|c| c.to_string()).collect(),
                    },
                }
            }
        }
    }

    /// Color for free text used as badge and title at once: the text
    /// itself if it is an explicit spec, otherwise a hashed pick seeded
    /// by the text.
    pub fn pick_for_text(&self, text: &str) -> Resolution {
        if let Some(rgb) = decode_spec(text, self.table) {
            return Resolution {
                rgb,
                choice: Choice::Picked(text.to_string()),
            };
        }
        let name = self.hashed_name(text);
        Resolution {
            rgb: self.color_of(name),
            choice: Choice::Picked(name.to_string()),
        }
    }

    fn hashed_name(&self, seed: &str) -> &'a str {
        let index = (self.hash)(seed) as usize % self.names.len();
        self.names[index]
    }

    fn random_name(rng: &mut R, names: &[&'a str]) -> &'a str {
        names
            .choose(rng)
            .copied()
            .unwrap_or(crate::table::DEFAULT_NAME)
    }

    fn color_of(&self, name: &str) -> RGB {
        self.table
            .get(name)
            .unwrap_or_else(|| self.table.default_rgb())
    }
}
