// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for toast components.

pub mod toast;
