// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! schh-core: session naming and selection for the schh CLI

pub mod host;
pub mod label;
pub mod listing;
pub mod selector;
pub mod session;
pub mod token;

pub use host::Host;
pub use label::LabelGenerator;
pub use listing::{parse_listing, SessionInfo};
pub use selector::{choose_session, Choice, SelectorError};
pub use session::{build_session_id, host_prefix, IdentityError, SessionId};
pub use token::canonicalize;
