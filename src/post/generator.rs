//! Synthetic post generator.
//!
//! Titles are `"{adjective} {noun}"`; bodies are hacker-jargon phrases built
//! from a fixed set of templates, e.g. "We need to bypass the neural SQL
//! bandwidth!".

use std::rc::Rc;

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::{Post, Posts};

const ABBREVIATIONS: &[&str] = &[
    "ADP", "AGP", "AI", "API", "ASCII", "CLI", "COM", "CSS", "DNS", "EXE", "FTP", "GB", "HDD",
    "HEX", "HTTP", "IB", "IP", "JBOD", "JSON", "OCR", "PCI", "PNG", "RAM", "SAS", "SCSI", "SDD",
    "SMS", "SMTP", "SQL", "SSD", "SSL", "TCP", "THX", "TLS", "UTF", "XML", "XSS",
];

const ADJECTIVES: &[&str] = &[
    "auxiliary",
    "primary",
    "back-end",
    "digital",
    "open-source",
    "virtual",
    "cross-platform",
    "redundant",
    "online",
    "haptic",
    "multi-byte",
    "bluetooth",
    "wireless",
    "1080p",
    "neural",
    "optical",
    "solid state",
    "mobile",
];

const NOUNS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

const VERBS: &[&str] = &[
    "back up",
    "bypass",
    "hack",
    "override",
    "compress",
    "copy",
    "navigate",
    "index",
    "connect",
    "generate",
    "quantify",
    "calculate",
    "synthesize",
    "input",
    "transmit",
    "program",
    "reboot",
    "parse",
];

const ING_VERBS: &[&str] = &[
    "backing up",
    "bypassing",
    "hacking",
    "overriding",
    "compressing",
    "copying",
    "navigating",
    "indexing",
    "connecting",
    "generating",
    "quantifying",
    "calculating",
    "synthesizing",
    "transmitting",
    "programming",
    "parsing",
];

/// One piece of a phrase template.
#[derive(Debug, Clone, Copy)]
enum Part {
    Lit(&'static str),
    Abbreviation,
    Adjective,
    Noun,
    Verb,
    IngVerb,
}

use Part::*;

#[rustfmt::skip]
const PHRASES: &[&[Part]] = &[
    &[
        Lit("If we "), Verb, Lit(" the "), Noun, Lit(", we can get to the "), Abbreviation,
        Lit(" "), Noun, Lit(" through the "), Adjective, Lit(" "), Abbreviation, Lit(" "), Noun,
        Lit("!"),
    ],
    &[
        Lit("We need to "), Verb, Lit(" the "), Adjective, Lit(" "), Abbreviation, Lit(" "), Noun,
        Lit("!"),
    ],
    &[
        Lit("Try to "), Verb, Lit(" the "), Abbreviation, Lit(" "), Noun,
        Lit(", maybe it will "), Verb, Lit(" the "), Adjective, Lit(" "), Noun, Lit("!"),
    ],
    &[
        Lit("You can't "), Verb, Lit(" the "), Noun, Lit(" without "), IngVerb, Lit(" the "),
        Adjective, Lit(" "), Abbreviation, Lit(" "), Noun, Lit("!"),
    ],
    &[
        Lit("Use the "), Adjective, Lit(" "), Abbreviation, Lit(" "), Noun,
        Lit(", then you can "), Verb, Lit(" the "), Adjective, Lit(" "), Noun, Lit("!"),
    ],
    &[
        Lit("The "), Abbreviation, Lit(" "), Noun, Lit(" is down, "), Verb, Lit(" the "),
        Adjective, Lit(" "), Noun, Lit(" so we can "), Verb, Lit(" the "), Abbreviation,
        Lit(" "), Noun, Lit("!"),
    ],
    &[
        IngVerb, Lit(" the "), Noun, Lit(" won't do anything, we need to "), Verb, Lit(" the "),
        Adjective, Lit(" "), Abbreviation, Lit(" "), Noun, Lit("!"),
    ],
    &[
        Lit("I'll "), Verb, Lit(" the "), Adjective, Lit(" "), Abbreviation, Lit(" "), Noun,
        Lit(", that should "), Noun, Lit(" the "), Abbreviation, Lit(" "), Noun, Lit("!"),
    ],
];

/// Produces random posts from any `rand` RNG.
#[derive(Debug, Clone)]
pub struct PostGenerator<R = StdRng> {
    rng: R,
}

impl PostGenerator<StdRng> {
    /// A generator that produces the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A seeded generator when `seed` is given, otherwise one seeded from
    /// the OS.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(StdRng::from_os_rng()),
        }
    }
}

impl PostGenerator<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> PostGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one post.
    pub fn generate(&mut self) -> Post {
        let title = format!("{} {}", self.pick(ADJECTIVES), self.pick(NOUNS));
        let body = self.phrase();
        Post { title, body }
    }

    /// Generate `count` posts into a fresh collection.
    pub fn generate_many(&mut self, count: usize) -> Posts {
        Rc::new((0..count).map(|_| self.generate()).collect())
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        // Vocabularies are non-empty constants
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn phrase(&mut self) -> String {
        let template = PHRASES.choose(&mut self.rng).copied().unwrap_or_default();

        let mut out = String::new();
        for part in template {
            let piece = match *part {
                Lit(text) => text,
                Abbreviation => self.pick(ABBREVIATIONS),
                Adjective => self.pick(ADJECTIVES),
                Noun => self.pick(NOUNS),
                Verb => self.pick(VERBS),
                IngVerb => self.pick(ING_VERBS),
            };
            out.push_str(piece);
        }

        capitalize(&out)
    }
}

/// Generate one post with the thread RNG.
pub fn generate() -> Post {
    PostGenerator::thread_local().generate()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_adjective_and_noun() {
        let mut generator = PostGenerator::seeded(7);

        for _ in 0..50 {
            let post = generator.generate();
            let adjective = ADJECTIVES
                .iter()
                .find(|adj| post.title.starts_with(&format!("{adj} ")))
                .copied();
            let adjective = adjective.expect("title starts with a known adjective");
            let noun = &post.title[adjective.len() + 1..];
            assert!(NOUNS.contains(&noun), "unknown noun in {:?}", post.title);
        }
    }

    #[test]
    fn test_body_is_a_capitalized_phrase() {
        let mut generator = PostGenerator::seeded(11);

        for _ in 0..50 {
            let post = generator.generate();
            assert!(post.body.ends_with('!'));
            assert!(!post.body.contains('{'));
            assert!(post.body.chars().next().is_some_and(|c| !c.is_lowercase()));
        }
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let a = PostGenerator::seeded(42).generate_many(10);
        let b = PostGenerator::seeded(42).generate_many(10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_many_count() {
        let posts = PostGenerator::seeded(1).generate_many(30);
        assert_eq!(posts.len(), 30);

        let none = PostGenerator::seeded(1).generate_many(0);
        assert!(none.is_empty());
    }

    #[test]
    fn test_free_generate_is_total() {
        for _ in 0..20 {
            let post = generate();
            assert!(!post.title.is_empty());
            assert!(!post.body.is_empty());
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("backing up the bus!"), "Backing up the bus!");
        assert_eq!(capitalize(""), "");
    }
}
