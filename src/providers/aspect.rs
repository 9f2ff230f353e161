// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logical aspect ratios and their per-model size encodings

use super::openai::OpenAiImageModel;

/// Size every unknown or missing ratio resolves to.
pub const FALLBACK_SIZE: &str = "1024x1024";

/// Aspect ratios the front-end can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Widescreen,
    Portrait,
    FourThree,
    ThreeFour,
}

impl AspectRatio {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1:1" => Some(AspectRatio::Square),
            "16:9" => Some(AspectRatio::Widescreen),
            "9:16" => Some(AspectRatio::Portrait),
            "4:3" => Some(AspectRatio::FourThree),
            "3:4" => Some(AspectRatio::ThreeFour),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::FourThree => "4:3",
            AspectRatio::ThreeFour => "3:4",
        }
    }
}

/// Map a logical ratio onto the size string a given OpenAI model family
/// accepts. Total by design: unknown ratios (and 4:3 / 3:4, which neither
/// model family supports natively) fall back to square rather than erroring,
/// matching the behavior the front-end was built against.
pub fn map_size(ratio: Option<&str>, model: OpenAiImageModel) -> &'static str {
    let ratio = ratio.and_then(AspectRatio::parse);
    match (ratio, model) {
        (Some(AspectRatio::Widescreen), OpenAiImageModel::DallE3) => "1792x1024",
        (Some(AspectRatio::Widescreen), OpenAiImageModel::GptImage1) => "1536x1024",
        (Some(AspectRatio::Portrait), OpenAiImageModel::DallE3) => "1024x1792",
        (Some(AspectRatio::Portrait), OpenAiImageModel::GptImage1) => "1024x1536",
        _ => FALLBACK_SIZE,
    }
}
