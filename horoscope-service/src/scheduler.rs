//! Wall-clock daily trigger for the delivery pipeline.
//!
//! A coarse polling loop checks whether the configured time has passed since the
//! last run. Runs missed while the process was down are not caught up.

use crate::config::ScheduleConfig;
use crate::models::DeliveryReport;
use crate::services::DailyPipeline;
use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Next-run bookkeeping for a job that fires once a day at `run_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    run_at: NaiveTime,
    next_run: NaiveDateTime,
}

impl DailySchedule {
    pub fn new(run_at: NaiveTime, now: NaiveDateTime) -> Self {
        Self {
            run_at,
            next_run: next_occurrence(run_at, now),
        }
    }

    pub fn next_run(&self) -> NaiveDateTime {
        self.next_run
    }

    /// Returns true when a run is due at `now` and advances to the next day.
    pub fn poll(&mut self, now: NaiveDateTime) -> bool {
        if now < self.next_run {
            return false;
        }
        self.next_run = next_occurrence(self.run_at, now);
        true
    }
}

/// First `run_at` strictly after `after`.
fn next_occurrence(run_at: NaiveTime, after: NaiveDateTime) -> NaiveDateTime {
    let today = after.date().and_time(run_at);
    if today > after {
        today
    } else {
        today + TimeDelta::days(1)
    }
}

pub struct Scheduler {
    pipeline: Arc<DailyPipeline>,
    schedule: DailySchedule,
    poll_interval: Duration,
}

impl Scheduler {
    pub fn new(pipeline: Arc<DailyPipeline>, config: &ScheduleConfig) -> Self {
        Self::starting_at(pipeline, config, Local::now().naive_local())
    }

    pub fn starting_at(
        pipeline: Arc<DailyPipeline>,
        config: &ScheduleConfig,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            pipeline,
            schedule: DailySchedule::new(config.run_at, now),
            poll_interval: config.poll_interval,
        }
    }

    pub fn next_run(&self) -> NaiveDateTime {
        self.schedule.next_run()
    }

    /// One wake cycle. The pipeline runs to completion inside the cycle when due.
    pub async fn tick(&mut self, now: NaiveDateTime) -> Option<DeliveryReport> {
        if !self.schedule.poll(now) {
            return None;
        }
        let report = self.pipeline.run_guarded().await;
        tracing::info!(next_run = %self.schedule.next_run(), "Scheduled run finished");
        report
    }

    /// Poll forever.
    pub async fn run(mut self) {
        tracing::info!(
            next_run = %self.schedule.next_run(),
            poll_seconds = self.poll_interval.as_secs(),
            "Scheduler started"
        );

        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            self.tick(Local::now().naive_local()).await;
        }
    }
}
