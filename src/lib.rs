//! # two-sample-statistics
//!
//! The computational core of an interactive two-sample hypothesis-testing teaching tool.
//!
//! This crate provides everything the tool's UI layer needs but does not render: loading a
//! fixed survey dataset, splitting a "Total happiness" outcome into two groups by a binary
//! categorical column, running a Student's or Welch's two-sample t-test with a one- or
//! two-sided alternative, and judging a learner's accept/reject decision against the
//! resulting p-value at a chosen confidence level.
//!
//! ## Core Features
//!
//! - **Group Filtering**: missing-value removal and binary partitioning of a numeric outcome
//! - **Hypothesis Testing**: Student's and Welch's independent two-sample t-tests with
//!   one-sided and two-sided alternatives
//! - **Decision Feedback**: classification of an accept/reject choice as correct or
//!   incorrect, with the explanation sentence shown to the learner
//! - **Display Values**: formatted p-values, confidence levels and hypothesis narrative text
//!
//! ## Quick Start
//!
//! Load a [`dataset::Dataset`] once at startup, then answer each user action with
//! [`report::run_test`], which returns a [`report::TestSummary`] ready for rendering. The
//! UI layer itself (widgets, callbacks, figures, serving) is an external collaborator and
//! lives outside this crate.
//!
//! ## Module Organization
//!
//! - **[`dataset`]**: dataset ingest and binary group filtering
//! - **[`testing`]**: t-tests, alternatives, and decision feedback
//! - **[`report`]**: request/response layer producing render-ready summaries

pub mod dataset;
pub mod error;
pub mod report;
pub mod testing;
