use std::borrow::Cow;
use std::ops::RangeInclusive;

const DECIMAL_DIGIT_RANGES: &[RangeInclusive<char>] = &['0'..='9'];
const HEX_DIGIT_RANGES: &[RangeInclusive<char>] = &['0'..='9', 'a'..='f', 'A'..='F'];
const SIGN_RANGES: &[RangeInclusive<char>] = &['+'..='+', '-'..='-'];
const QUOTE_RANGES: &[RangeInclusive<char>] = &['"'..='"'];
const NEWLINE_RANGES: &[RangeInclusive<char>] = &[
    '\u{000A}'..='\u{000D}',
    '\u{0085}'..='\u{0085}',
    '\u{2028}'..='\u{2029}',
];

/// A set of characters, stored as inclusive ranges
///
/// The built-in classes are `const` and borrow static data; `union` and the
/// owned constructors allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    ranges: Cow<'static, [RangeInclusive<char>]>,
}

impl CharSet {
    /// `0`-`9`
    pub const DECIMAL_DIGITS: CharSet = CharSet::from_static(DECIMAL_DIGIT_RANGES);

    /// `0`-`9`, `a`-`f`, `A`-`F`
    pub const HEX_DIGITS: CharSet = CharSet::from_static(HEX_DIGIT_RANGES);

    /// `+` and `-`
    pub const SIGNS: CharSet = CharSet::from_static(SIGN_RANGES);

    /// `"`
    pub const QUOTES: CharSet = CharSet::from_static(QUOTE_RANGES);

    /// Line feed, vertical tab, form feed, carriage return, next line, and the
    /// Unicode line and paragraph separators
    pub const NEWLINES: CharSet = CharSet::from_static(NEWLINE_RANGES);

    pub const fn from_static(ranges: &'static [RangeInclusive<char>]) -> Self {
        CharSet {
            ranges: Cow::Borrowed(ranges),
        }
    }

    pub fn range(range: RangeInclusive<char>) -> Self {
        CharSet {
            ranges: Cow::Owned(vec![range]),
        }
    }

    pub fn from_chars(chars: &str) -> Self {
        CharSet {
            ranges: Cow::Owned(chars.chars().map(|c| c..=c).collect()),
        }
    }

    /// Every character in either set
    pub fn union(self, other: CharSet) -> Self {
        let mut ranges = self.ranges.into_owned();
        ranges.extend(other.ranges.iter().cloned());
        CharSet {
            ranges: Cow::Owned(ranges),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|range| range.contains(&c))
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharSet {
            ranges: Cow::Owned(iter.into_iter().map(|c| c..=c).collect()),
        }
    }
}
