// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure derived reads over the Board: frame arithmetic, the
//! reparent-candidate tree, and connection legality. Nothing in here
//! mutates, and nothing is cached across mutations.

pub mod connect;
pub mod position;
pub mod reparent;

pub use connect::{connection_allowed, ConnectionProposal};
pub use position::{absolute_position, absolute_position_of, relative_position};
pub use reparent::{reparent_candidates, GroupTreeNode};
