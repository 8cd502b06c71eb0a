// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Re-exports the deterministic note, activity, and event generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
