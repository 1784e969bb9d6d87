// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stages of the per-tick pipeline.
//!
//! [`crate::Space::update`] calls them in this fixed order:
//! 1. [`forces::resolve_forces`]
//! 2. [`concretes::mark_precollisions`]
//! 3. [`concretes::move_axis`] for X, then for Y
//! 4. [`entities::detect`] then [`entities::push_apart`]
//! 5. [`contact::apply_friction`] then [`contact::apply_bounce`]
//!
//! Every stage iterates objects in insertion order and nothing else, which is
//! what makes a run reproducible.

pub(crate) mod concretes;
pub(crate) mod contact;
pub(crate) mod entities;
pub(crate) mod forces;
