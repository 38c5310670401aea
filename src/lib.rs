//! # wanderbook
//!
//! A library for turning travel records into a themed, print-ready HTML
//! photo book, laid out on A4 pages for PDF rasterization.
//!
//! ## Features
//!
//! - Typed block model (cover, TOC, photo, description, recommendation,
//!   gallery, map, QR, spacer) with tagged-JSON serde support
//! - Five shipped themes and a preset catalog with picker metadata
//! - Image proxy rewriting, with blob/data/local URL handling
//! - Deterministic output: seedable quote picks, creation date captured
//!   once per generator
//!
//! ## Quick Start
//!
//! ```
//! use wanderbook::book::BookGenerator;
//! use wanderbook::model::{BookSettings, TravelForBook};
//!
//! let travels = vec![
//!     TravelForBook::new("42", "Браслав")
//!         .with_country("Беларусь")
//!         .with_description("Озера, сосны и тишина."),
//! ];
//!
//! let html = BookGenerator::new(BookSettings::default())
//!     .with_seed(1)
//!     .generate(&travels);
//!
//! assert!(html.contains("Браслав"));
//! assert!(html.contains("pdf-page"));
//! ```
//!
//! ## Rendering Blocks
//!
//! Blocks are plain data and deserialize from tagged JSON, so a saved
//! layout can be rendered without going through the generator:
//!
//! ```
//! use wanderbook::model::Block;
//! use wanderbook::render::BlockRenderer;
//! use wanderbook::theme::default_theme;
//!
//! let block: Block = serde_json::from_str(
//!     r#"{"type": "photo", "url": "https://example.com/sunset.jpg"}"#,
//! ).unwrap();
//!
//! let html = BlockRenderer::new(default_theme()).render_blocks(std::slice::from_ref(&block));
//! assert!(html.contains("images.weserv.nl"));
//! ```

pub mod book;
pub mod error;
pub mod image;
pub mod model;
pub mod quotes;
pub mod render;
pub mod theme;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use book::BookGenerator;
pub use error::{Error, Result};
pub use image::{ImageProxyConfig, rewrite_image_url};
pub use model::{Block, BookSettings, TravelForBook};
pub use render::BlockRenderer;
pub use theme::Theme;
