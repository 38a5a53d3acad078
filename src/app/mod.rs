// Copyright 2024-2025 hrzlgnm
// SPDX-License-Identifier: MIT-0

mod api_status;
pub mod bootstrap;
mod http;
pub mod icons;
mod macros;
pub mod main;
pub mod storage;
mod theme_switcher;
