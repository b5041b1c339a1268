#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::wildcard_imports,
    clippy::too_many_lines,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod app;
pub mod cli;
pub mod drone;
pub mod error;
pub mod events;
pub mod fetch;
pub mod gateway;
pub mod input;
pub mod items;
pub mod list;
pub mod logs;
pub mod model;
pub mod nav;
pub mod smoothing;
pub mod status;
pub mod tui;
