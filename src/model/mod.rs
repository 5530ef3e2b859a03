// 麻雀のデータモデル
mod context;
mod define;
mod hand;
mod meld;
mod score_context;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use context::*;
pub use define::*;
pub use hand::*;
pub use meld::*;
pub use score_context::*;
pub use tile::*;
