// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Almanac Text Loader
//!
//! Turns the line-oriented almanac text into a validated [`Almanac`]. This
//! is the one-shot builder between raw input and the immutable core: it
//! parses completely, builds every translation table, and only then hands
//! over the finished pipeline, so no parsing state leaks into translation.
//!
//! The expected format is:
//!
//! ```raw
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//!
//! soil-to-fertilizer map:
//! 0 15 37
//! ...
//! ```
//!
//! Each rule line holds three integers: the destination range start, the
//! source range start, and the range length. The loader converts them to a
//! source interval `[source, source + length)` and the offset
//! `destination - source`. Map blocks are separated by blank lines and must
//! appear in pipeline order; by default the loader verifies that each
//! block's source category matches the previous block's destination
//! category (`seed-to-soil` must be followed by `soil-to-...`).
//!
//! The loader accepts any `BufRead`, raw reader, file path, or string
//! slice, making it convenient for tests, benchmarks, and tooling.

use crate::{
    almanac::Almanac,
    error::ModelError,
    pipeline::Pipeline,
    rule::Rule,
    table::TranslationTable,
};
use almanac_core::math::interval::Interval;
use num_traits::{PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the almanac loading process.
#[derive(Debug)]
pub enum LoaderError<T>
where
    T: PrimInt,
{
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input contains no `seeds:` header line.
    MissingSeeds,
    /// The input contains no map blocks after the seed line.
    MissingMaps,
    /// A token could not be parsed into the expected integer type.
    Parse(ParseTokenError),
    /// A rule line did not consist of exactly three integers.
    MalformedRule {
        /// The offending line, verbatim.
        line: String,
    },
    /// A map header could not be read as `<from>-to-<to> map:`.
    MalformedHeader {
        /// The offending line, verbatim.
        line: String,
    },
    /// A map block's source category does not continue the previous
    /// block's destination category.
    BrokenChain {
        /// The category the previous block translates into.
        expected: String,
        /// The source category actually found.
        found: String,
    },
    /// A rule's source range, destination range, or offset overflowed the
    /// integer type, so resolving it could not stay in bounds.
    RuleOverflow {
        /// The destination range start as given.
        dest: T,
        /// The source range start as given.
        source: T,
        /// The range length as given.
        length: T,
    },
    /// The parsed data violates a model invariant (overlapping rules,
    /// empty pipeline).
    Model(ModelError<T>),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl<T> std::fmt::Display for LoaderError<T>
where
    T: PrimInt + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingSeeds => write!(f, "input contains no 'seeds:' header line"),
            Self::MissingMaps => write!(f, "input contains no map blocks"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::MalformedRule { line } => {
                write!(f, "rule line must hold three integers, got: '{line}'")
            }
            Self::MalformedHeader { line } => {
                write!(f, "map header must read '<from>-to-<to> map:', got: '{line}'")
            }
            Self::BrokenChain { expected, found } => write!(
                f,
                "map order broken: expected a map from '{expected}', found one from '{found}'"
            ),
            Self::RuleOverflow {
                dest,
                source,
                length,
            } => write!(
                f,
                "rule '{dest} {source} {length}' overflows the integer type"
            ),
            Self::Model(e) => write!(f, "model error: {e}"),
        }
    }
}

impl<T> std::error::Error for LoaderError<T> where T: PrimInt + Display + Debug {}

impl<T> From<std::io::Error> for LoaderError<T>
where
    T: PrimInt,
{
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl<T> From<ParseTokenError> for LoaderError<T>
where
    T: PrimInt,
{
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl<T> From<ModelError<T>> for LoaderError<T>
where
    T: PrimInt,
{
    fn from(e: ModelError<T>) -> Self {
        Self::Model(e)
    }
}

/// A configurable loader for almanac text.
///
/// # Configuration
///
/// * `verify_chain`: When enabled (the default), each map block's source
///   category must match the previous block's destination category, so the
///   stage order in the text is the pipeline order it claims to be.
///
/// # Examples
///
/// ```rust
/// # use almanac_model::loading::AlmanacLoader;
///
/// let text = "seeds: 79 14\n\nseed-to-soil map:\n52 50 48\n";
/// let almanac = AlmanacLoader::new().from_str::<i64>(text).unwrap();
/// assert_eq!(almanac.seeds(), &[79i64, 14]);
/// assert_eq!(almanac.pipeline().num_stages(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmanacLoader {
    verify_chain: bool,
}

impl Default for AlmanacLoader {
    fn default() -> Self {
        Self { verify_chain: true }
    }
}

impl AlmanacLoader {
    /// Creates a new `AlmanacLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether map blocks must chain source to destination.
    #[inline]
    pub fn verify_chain(mut self, yes: bool) -> Self {
        self.verify_chain = yes;
        self
    }

    /// Loads an almanac from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<Almanac<T>, LoaderError<T>>
    where
        T: PrimInt + Signed + FromStr,
        R: BufRead,
    {
        let mut lines = rdr.lines();

        let seeds = self.read_seeds(&mut lines)?;

        let mut tables: Vec<TranslationTable<T>> = Vec::new();
        let mut previous_destination: Option<String> = None;

        while let Some(header) = next_nonblank(&mut lines)? {
            let (from, to) = parse_map_header(&header)?;

            if self.verify_chain {
                if let Some(expected) = &previous_destination {
                    if *expected != from {
                        return Err(LoaderError::BrokenChain {
                            expected: expected.clone(),
                            found: from,
                        });
                    }
                }
            }

            let rules = read_rules(&mut lines)?;
            tables.push(TranslationTable::new(format!("{from}-to-{to}"), rules)?);
            previous_destination = Some(to);
        }

        if tables.is_empty() {
            return Err(LoaderError::MissingMaps);
        }

        Ok(Almanac::new(seeds, Pipeline::new(tables)?))
    }

    /// Loads an almanac from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<Almanac<T>, LoaderError<T>>
    where
        T: PrimInt + Signed + FromStr,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an almanac from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Almanac<T>, LoaderError<T>>
    where
        T: PrimInt + Signed + FromStr,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an almanac from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<Almanac<T>, LoaderError<T>>
    where
        T: PrimInt + Signed + FromStr,
    {
        self.from_reader(s.as_bytes())
    }

    /// Reads the `seeds:` header line.
    fn read_seeds<T, I>(&self, lines: &mut I) -> Result<Vec<T>, LoaderError<T>>
    where
        T: PrimInt + Signed + FromStr,
        I: Iterator<Item = std::io::Result<String>>,
    {
        let line = next_nonblank(lines)?.ok_or(LoaderError::MissingSeeds)?;
        let numbers = line
            .strip_prefix("seeds:")
            .ok_or(LoaderError::MissingSeeds)?;

        numbers
            .split_whitespace()
            .map(|token| parse_token(token).map_err(LoaderError::Parse))
            .collect()
    }
}

/// Advances to the next non-blank line, trimming surrounding whitespace.
fn next_nonblank<T, I>(lines: &mut I) -> Result<Option<String>, LoaderError<T>>
where
    T: PrimInt,
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_owned()));
        }
    }
    Ok(None)
}

/// Parses a `<from>-to-<to> map:` header into its two category names.
fn parse_map_header<T>(line: &str) -> Result<(String, String), LoaderError<T>>
where
    T: PrimInt,
{
    let malformed = || LoaderError::MalformedHeader {
        line: line.to_owned(),
    };

    let name = line.strip_suffix("map:").ok_or_else(malformed)?.trim();
    let (from, to) = name.split_once("-to-").ok_or_else(malformed)?;
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }
    Ok((from.to_owned(), to.to_owned()))
}

/// Reads rule lines until a blank line or the end of input.
fn read_rules<T, I>(lines: &mut I) -> Result<Vec<Rule<T>>, LoaderError<T>>
where
    T: PrimInt + Signed + FromStr,
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut rules = Vec::new();

    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        rules.push(parse_rule(trimmed)?);
    }

    Ok(rules)
}

/// Parses one `dest source length` rule line.
fn parse_rule<T>(line: &str) -> Result<Rule<T>, LoaderError<T>>
where
    T: PrimInt + Signed + FromStr,
{
    let mut tokens = line.split_whitespace();
    let (Some(dest), Some(source), Some(length), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(LoaderError::MalformedRule {
            line: line.to_owned(),
        });
    };

    let dest: T = parse_token(dest)?;
    let source: T = parse_token(source)?;
    let length: T = parse_token(length)?;

    let overflow = || LoaderError::RuleOverflow {
        dest,
        source,
        length,
    };

    // Both range ends and the offset must be representable, otherwise
    // resolution would overflow later instead of failing here.
    let end = source.checked_add(&length).ok_or_else(overflow)?;
    let delta = dest.checked_sub(&source).ok_or_else(overflow)?;
    dest.checked_add(&length).ok_or_else(overflow)?;

    let interval = Interval::try_new(source, end).map_err(ModelError::from)?;

    Ok(Rule::new(interval, delta))
}

/// Parses a single integer token, reporting the token and target type on
/// failure.
fn parse_token<T>(token: &str) -> Result<T, ParseTokenError>
where
    T: FromStr,
{
    token.parse::<T>().map_err(|_| ParseTokenError {
        token: token.to_owned(),
        type_name: std::any::type_name::<T>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKED_EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn test_loads_worked_example() {
        let almanac: Almanac<i64> = AlmanacLoader::new().from_str(WORKED_EXAMPLE).unwrap();

        assert_eq!(almanac.seeds(), &[79, 14, 55, 13]);
        assert_eq!(almanac.pipeline().num_stages(), 7);
        assert_eq!(almanac.pipeline().stages()[0].name(), "seed-to-soil");
        assert_eq!(
            almanac.pipeline().stages()[6].name(),
            "humidity-to-location"
        );

        // "50 98 2" maps sources [98, 100) by -48.
        let first = &almanac.pipeline().stages()[0];
        assert_eq!(first.resolve_point(98), 50);
        assert_eq!(first.resolve_point(79), 81);
    }

    #[test]
    fn test_worked_example_locations() {
        let almanac: Almanac<i64> = AlmanacLoader::new().from_str(WORKED_EXAMPLE).unwrap();
        let pipeline = almanac.pipeline();

        assert_eq!(pipeline.apply_point(79), 82);
        assert_eq!(pipeline.apply_point(14), 43);
        assert_eq!(pipeline.apply_point(55), 86);
        assert_eq!(pipeline.apply_point(13), 35);
    }

    #[test]
    fn test_missing_seeds() {
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str("seed-to-soil map:\n");
        assert!(matches!(res, Err(LoaderError::MissingSeeds)));

        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str("");
        assert!(matches!(res, Err(LoaderError::MissingSeeds)));
    }

    #[test]
    fn test_missing_maps() {
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str("seeds: 1 2 3\n");
        assert!(matches!(res, Err(LoaderError::MissingMaps)));
    }

    #[test]
    fn test_parse_error_structure() {
        let text = "seeds: 79 garbage\n\nseed-to-soil map:\n52 50 48\n";
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(text);

        match res {
            Err(LoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_rule_line() {
        let text = "seeds: 1\n\nseed-to-soil map:\n52 50\n";
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(text);
        match res {
            Err(LoaderError::MalformedRule { line }) => assert_eq!(line, "52 50"),
            other => panic!("expected MalformedRule, got {other:?}"),
        }
    }

    #[test]
    fn test_rule_overflow_rejected_at_load() {
        // Destination range end past the type's maximum; translating a
        // matching point would overflow, so loading must fail instead.
        let text = format!("seeds: 5\n\nseed-to-soil map:\n{} 0 10\n", i64::MAX - 3);
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(&text);
        match res {
            Err(LoaderError::RuleOverflow {
                dest,
                source,
                length,
            }) => {
                assert_eq!(dest, i64::MAX - 3);
                assert_eq!(source, 0);
                assert_eq!(length, 10);
            }
            other => panic!("expected RuleOverflow, got {other:?}"),
        }

        // Source range end past the maximum.
        let text = format!("seeds: 5\n\nseed-to-soil map:\n0 {} 10\n", i64::MAX - 3);
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(&text);
        assert!(matches!(res, Err(LoaderError::RuleOverflow { .. })));

        // Offset past the maximum even though both range ends fit.
        let text = format!(
            "seeds: 5\n\nseed-to-soil map:\n{} {} 10\n",
            1i64 << 62,
            -(1i64 << 62) - 4
        );
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(&text);
        assert!(matches!(res, Err(LoaderError::RuleOverflow { .. })));
    }

    #[test]
    fn test_rule_reaching_type_maximum_loads() {
        let text = format!("seeds: 5\n\nseed-to-soil map:\n{} 0 10\n", i64::MAX - 10);
        let almanac: Almanac<i64> = AlmanacLoader::new().from_str(&text).unwrap();
        assert_eq!(almanac.pipeline().apply_point(5), i64::MAX - 5);
    }

    #[test]
    fn test_malformed_header() {
        let text = "seeds: 1\n\nseed soil map:\n52 50 48\n";
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(text);
        assert!(matches!(res, Err(LoaderError::MalformedHeader { .. })));
    }

    #[test]
    fn test_broken_chain_detected() {
        let text = "\
seeds: 1

seed-to-soil map:
52 50 48

water-to-light map:
88 18 7
";
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(text);
        match res {
            Err(LoaderError::BrokenChain { expected, found }) => {
                assert_eq!(expected, "soil");
                assert_eq!(found, "water");
            }
            other => panic!("expected BrokenChain, got {other:?}"),
        }

        // The same text loads when chain verification is off.
        let res: Result<Almanac<i64>, _> =
            AlmanacLoader::new().verify_chain(false).from_str(text);
        assert!(res.is_ok());
    }

    #[test]
    fn test_overlapping_rules_surface_as_model_error() {
        let text = "\
seeds: 1

seed-to-soil map:
0 10 20
5 15 20
";
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(text);
        assert!(matches!(
            res,
            Err(LoaderError::Model(ModelError::OverlappingRules { .. }))
        ));
    }

    #[test]
    fn test_loads_from_reader() {
        let bytes = WORKED_EXAMPLE.as_bytes();
        let almanac: Almanac<i64> = AlmanacLoader::new().from_reader(bytes).unwrap();
        assert_eq!(almanac.pipeline().num_stages(), 7);
    }
}
