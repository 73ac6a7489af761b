use rand::seq::SliceRandom;
use rand::Rng;

use super::urls::{FALLBACK_URL, JP_URLS, RESISTANT_URLS, SG_URLS, US_URLS};
use crate::common::CountryCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Sg,
    Jp,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Us, Region::Sg, Region::Jp];

    pub fn from_country(code: &CountryCode) -> Option<Self> {
        match code.lookup_key().as_str() {
            "us" => Some(Region::Us),
            "sg" => Some(Region::Sg),
            "jp" => Some(Region::Jp),
            _ => None,
        }
    }

    fn urls(self) -> &'static [&'static str] {
        match self {
            Region::Us => US_URLS,
            Region::Sg => SG_URLS,
            Region::Jp => JP_URLS,
        }
    }
}

/// Concatenates the lists, keeping only the first occurrence of each entry.
pub fn merge_unique<'a>(lists: &[&[&'a str]]) -> Vec<&'a str> {
    let mut merged: Vec<&'a str> = Vec::new();
    for url in lists.iter().flat_map(|list| list.iter()) {
        if !merged.contains(url) {
            merged.push(*url);
        }
    }
    merged
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlPool {
    urls: Vec<&'static str>,
}

impl UrlPool {
    pub fn for_region(region: Region) -> Self {
        Self {
            urls: merge_unique(&[region.urls(), RESISTANT_URLS]),
        }
    }

    pub fn for_country(code: &CountryCode) -> Self {
        match Region::from_country(code) {
            Some(region) => Self::for_region(region),
            None => Self::fallback(),
        }
    }

    pub fn fallback() -> Self {
        Self {
            urls: vec![FALLBACK_URL],
        }
    }

    pub fn urls(&self) -> &[&'static str] {
        &self.urls
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| *u == url)
    }

    /// Uniformly random member of the pool.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.urls.choose(rng).copied().unwrap_or(FALLBACK_URL)
    }
}
