// ABOUTME: Subcommand handlers for courtside-cli
// ABOUTME: Seed an in-memory store from a dataset file and render service results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use courtside::config::AppConfig;
use courtside::dataset::load_dataset;
use courtside::errors::AppResult;
use courtside::models::Period;
use courtside::services::InsightService;
use courtside::store::InMemoryStore;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

async fn service_for(
    config: &AppConfig,
    data: &Path,
    owner: &str,
) -> AppResult<InsightService<InMemoryStore>> {
    let dataset = load_dataset(data).await?;
    let store = Arc::new(InMemoryStore::new());
    dataset.load_into(store.as_ref(), owner).await?;
    Ok(InsightService::new(store, config.intelligence.clone()))
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub async fn insights(
    config: &AppConfig,
    data: &Path,
    owner: &str,
    period: Period,
) -> AppResult<String> {
    let service = service_for(config, data, owner).await?;
    let generated = service.generate_insights(owner, period).await?;
    render(&generated)
}

pub async fn dashboard(config: &AppConfig, data: &Path, owner: &str) -> AppResult<String> {
    let service = service_for(config, data, owner).await?;
    render(&service.dashboard(owner).await?)
}

pub async fn form(config: &AppConfig, data: &Path, owner: &str) -> AppResult<String> {
    let service = service_for(config, data, owner).await?;
    render(&service.recent_form(owner).await?)
}
