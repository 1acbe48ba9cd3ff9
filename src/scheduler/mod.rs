pub mod trigger;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::api::medals_api::MedalSource;
use crate::leaderboard::Leaderboard;
use crate::render::clock::Clock;
use crate::render::{Outcome, RenderTarget, Renderer};

#[derive(Debug, Clone, Copy)]
pub enum RefreshType {
    Schedule,
    Manual,
}

/// Everything a refresh cycle touches. Shared between the timer task and manual refreshes.
pub struct SchedulerContext<S, T, C> {
    source: S,
    clock: C,
    renderer: Renderer,
    target: Mutex<T>,
    leaderboard: Mutex<Leaderboard>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S, T, C> SchedulerContext<S, T, C>
where
    S: MedalSource,
    T: RenderTarget,
    C: Clock,
{
    /// One fetch-and-render cycle. Never fails: errors are logged and shown as a notice.
    #[tracing::instrument(level = "info", skip(self))]
    async fn refresh(&self, refresh_type: RefreshType) {
        let fetched = self.source.fetch_medals().await;

        // Target before leaderboard, so the stored and rendered tables always match.
        let mut target = lock(&self.target);
        let rendered = match fetched {
            Ok(entries) => {
                let mut leaderboard = lock(&self.leaderboard);
                *leaderboard = Leaderboard::ranked(entries);
                if leaderboard.is_empty() {
                    warn!("Backend returned no medal entries");
                } else {
                    info!(rows = leaderboard.len(), "Leaderboard refreshed");
                }

                self.renderer
                    .render(&mut *target, Outcome::Loaded(&*leaderboard), self.clock.now())
            }
            Err(e) => {
                error!(error = %e, "Error fetching medals");
                self.renderer
                    .render(&mut *target, Outcome::Failed, self.clock.now())
            }
        };

        if let Err(e) = rendered {
            error!(error = ?e, "Failed to render leaderboard");
        }
    }
}

/// Owns the leaderboard state and at most one recurring refresh timer.
pub struct LeaderboardClient<S, T, C> {
    ctx: Arc<SchedulerContext<S, T, C>>,
    interval: Duration,
    refresh_timer: Option<JoinHandle<()>>,
}

impl<S, T, C> LeaderboardClient<S, T, C>
where
    S: MedalSource + Send + Sync + 'static,
    T: RenderTarget + Send + 'static,
    C: Clock + Send + Sync + 'static,
{
    pub fn new(source: S, target: T, clock: C, renderer: Renderer, interval: Duration) -> Self {
        Self {
            ctx: Arc::new(SchedulerContext {
                source,
                clock,
                renderer,
                target: Mutex::new(target),
                leaderboard: Mutex::new(Leaderboard::default()),
            }),
            interval,
            refresh_timer: None,
        }
    }

    /// Refreshes right away, then every interval until stopped. Re-arms instead of stacking timers.
    pub fn start(&mut self) {
        self.stop();

        let ctx = self.ctx.clone();
        let period = self.interval;
        self.refresh_timer = Some(tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                ctx.refresh(RefreshType::Schedule).await;
            }
        }));

        info!(interval_secs = self.interval.as_secs_f64(), "Auto-refresh started");
    }

    /// One cycle outside the schedule. The recurring timer keeps its phase.
    pub fn refresh_now(&self) -> JoinHandle<()> {
        let ctx = self.ctx.clone();
        tokio::spawn(async move { ctx.refresh(RefreshType::Manual).await })
    }

    pub fn leaderboard(&self) -> Leaderboard {
        lock(&self.ctx.leaderboard).clone()
    }

    #[cfg(test)]
    pub(crate) fn with_target<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&lock(&self.ctx.target))
    }
}

impl<S, T, C> LeaderboardClient<S, T, C> {
    pub fn stop(&mut self) {
        if let Some(timer) = self.refresh_timer.take() {
            timer.abort();
            info!("Auto-refresh stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.refresh_timer.is_some()
    }
}

impl<S, T, C> Drop for LeaderboardClient<S, T, C> {
    fn drop(&mut self) {
        if self.refresh_timer.is_some() {
            warn!("Leaderboard client dropped while running, stopping auto-refresh");
        }
        self.stop();
    }
}
