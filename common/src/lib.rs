//! Shared catalog model and rendering logic for the storefront page and its
//! development server.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod fragment;
pub mod markup;
pub mod model;
pub mod nav;
pub mod whatsapp;
