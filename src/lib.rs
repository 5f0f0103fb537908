//! Core of a bilingual (Arabic/English) administration dashboard for a
//! fitness-training studio: trainers, clients, packages and bookings served by
//! an in-memory simulated API, with derived renewal reminders.

pub mod actor_framework;
pub mod app_system;
pub mod booking_actor;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod i18n;
pub mod notifications;
pub mod package_actor;
pub mod preferences;
pub mod storage;
pub mod user_actor;
pub mod views;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
