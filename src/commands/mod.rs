//! # Commands
//!
//! CLI command implementations for db32.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod check;
pub mod completions;
pub mod decode;
pub mod encode;
pub mod random;
pub mod setup;
pub mod table;
pub mod time;

pub use self::{
    check::{execute as check, CheckArgs},
    decode::{execute as decode, DecodeArgs},
    encode::{execute as encode, EncodeArgs, InputFormat},
    random::{execute as random, RandomArgs},
    setup::execute as setup,
    table::{execute as table, TableArgs},
    time::{execute as time, TimeArgs},
};
