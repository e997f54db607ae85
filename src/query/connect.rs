// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connection legality between two named handles.

use crate::model::{Board, ElementId, HandleRole};

/// A proposed edge, as delivered by the host UI's connect gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProposal {
    pub source_id: ElementId,
    pub source_handle: String,
    pub target_id: ElementId,
    pub target_handle: String,
}

/// Legal iff both endpoints resolve, the named source handle is declared
/// `source`, and the named target handle is declared `target`. No other
/// compatibility rule; node kinds do not matter.
pub fn connection_allowed(board: &Board, proposal: &ConnectionProposal) -> bool {
    let Some(source) = board.find(&proposal.source_id) else {
        return false;
    };
    let Some(target) = board.find(&proposal.target_id) else {
        return false;
    };

    let source_role = source
        .body()
        .handles()
        .and_then(|handles| handles.get(&proposal.source_handle));
    let target_role = target
        .body()
        .handles()
        .and_then(|handles| handles.get(&proposal.target_handle));

    source_role == Some(&HandleRole::Source) && target_role == Some(&HandleRole::Target)
}
