//! Agent task board simulation.
//!
//! Tasks do no real work. A caller-driven [`tick`] moves them through their
//! steps the way the dashboard's progress timer does, with the randomness
//! source injected so runs are reproducible. [`watch_in`] drives the same
//! tick from a fixed-interval timer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sully_core::entities::{AgentLogEntry, AgentTask};
use sully_core::enums::{AgentKind, AgentTaskStatus, LogKind};
use sully_core::ids::{PREFIX_TASK, generate_id, random_index};
use sully_store::WorkspaceStore;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use crate::error::AgentError;

pub const STEPS: [&str; 5] = [
    "Researching",
    "Analyzing Signals",
    "Synthesizing Response",
    "Validating Outcome",
    "Finalizing",
];

pub const FINISHED_STEP: &str = "Execution Finished";

/// Progress a task jumps to when it starts running.
pub const START_PROGRESS: u8 = 5;

/// Exclusive upper bound of one progress increment.
pub const MAX_INCREMENT: u8 = 15;

/// Create a pending task and the log entry announcing it.
///
/// # Errors
///
/// Returns [`AgentError::Validation`] for a blank description and
/// [`AgentError::Core`] if no id can be generated.
pub fn assign(
    agent: AgentKind,
    description: &str,
    now: DateTime<Utc>,
) -> Result<(AgentTask, AgentLogEntry), AgentError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(AgentError::Validation("task description must not be blank".into()));
    }
    let task = AgentTask::assign(generate_id(PREFIX_TASK)?, agent, description, now);
    let log = AgentLogEntry {
        time: now,
        agent: task.agent_name.clone(),
        msg: format!("Task Assigned: {description}"),
        kind: LogKind::Info,
    };
    Ok((task, log))
}

/// Advance every non-terminal task by one step. Returns the log entries for
/// tasks that completed on this tick.
pub fn tick<R>(tasks: &mut [AgentTask], mut roll: R, now: DateTime<Utc>) -> Vec<AgentLogEntry>
where
    R: FnMut() -> u8,
{
    let mut logs = Vec::new();
    for task in tasks.iter_mut().filter(|t| !t.status.is_terminal()) {
        if task.status == AgentTaskStatus::Pending {
            task.status = AgentTaskStatus::Running;
            task.progress = START_PROGRESS;
            task.step = STEPS[0].to_string();
            continue;
        }

        let progress = task.progress.saturating_add(roll() % MAX_INCREMENT);
        if progress >= 100 {
            task.status = AgentTaskStatus::Completed;
            task.progress = 100;
            task.step = FINISHED_STEP.to_string();
            logs.push(AgentLogEntry {
                time: now,
                agent: task.agent_name.clone(),
                msg: format!("Completed: {}", task.description),
                kind: LogKind::Success,
            });
        } else {
            task.progress = progress;
            task.step = step_for(progress).to_string();
        }
    }
    logs
}

fn step_for(progress: u8) -> &'static str {
    let idx = (usize::from(progress) * STEPS.len() / 100).min(STEPS.len() - 1);
    STEPS[idx]
}

/// A roll drawn from the OS random source, falling back to no progress.
#[must_use]
pub fn os_roll() -> u8 {
    random_index(usize::from(MAX_INCREMENT))
        .ok()
        .and_then(|v| u8::try_from(v).ok())
        .unwrap_or(0)
}

// ── Workspace-backed operations ────────────────────────────────────

/// Assign a task in `store`, newest first, and log it.
///
/// # Errors
///
/// Returns [`AgentError`] if validation, id generation or the store fails.
pub async fn assign_in(
    store: &WorkspaceStore,
    agent: AgentKind,
    description: &str,
    now: DateTime<Utc>,
) -> Result<AgentTask, AgentError> {
    let (task, log) = assign(agent, description, now)?;
    let mut tasks = store.agent_tasks().await?;
    tasks.insert(0, task.clone());
    store.save_agent_tasks(&tasks).await?;
    store.prepend_logs(vec![log]).await?;
    debug!(workspace = store.id(), task = %task.id, agent = %agent, "task assigned");
    Ok(task)
}

/// Run one tick over the workspace's tasks and persist the result.
///
/// # Errors
///
/// Returns [`AgentError::Store`] if the tasks cannot be read or written.
pub async fn tick_in<R>(
    store: &WorkspaceStore,
    roll: R,
    now: DateTime<Utc>,
) -> Result<Vec<AgentTask>, AgentError>
where
    R: FnMut() -> u8 + Send,
{
    let mut tasks = store.agent_tasks().await?;
    if tasks.iter().all(|t| t.status.is_terminal()) {
        return Ok(tasks);
    }
    let logs = tick(&mut tasks, roll, now);
    store.save_agent_tasks(&tasks).await?;
    store.prepend_logs(logs).await?;
    Ok(tasks)
}

/// Tick the workspace's tasks every `period` until none is left running or
/// pending. `on_tick` sees the board after each tick. Returns the final
/// board and the number of ticks taken.
///
/// # Errors
///
/// Returns [`AgentError::Validation`] for a zero period and
/// [`AgentError::Store`] if the tasks cannot be read or written.
pub async fn watch_in<R, F>(
    store: &WorkspaceStore,
    period: Duration,
    mut roll: R,
    mut on_tick: F,
) -> Result<(Vec<AgentTask>, u32), AgentError>
where
    R: FnMut() -> u8 + Send,
    F: FnMut(&[AgentTask]) + Send,
{
    if period.is_zero() {
        return Err(AgentError::Validation("tick interval must be positive".into()));
    }
    let mut tasks = store.agent_tasks().await?;
    let mut ticks = 0;
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of an interval completes immediately.
    timer.tick().await;
    while tasks.iter().any(|t| !t.status.is_terminal()) {
        timer.tick().await;
        tasks = tick_in(store, &mut roll, Utc::now()).await?;
        ticks += 1;
        on_tick(&tasks);
    }
    debug!(workspace = store.id(), ticks, "task board idle");
    Ok((tasks, ticks))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use super::*;
    use crate::test_support::seeded_store;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn running(progress: u8) -> AgentTask {
        let mut task =
            AgentTask::assign("tsk-1".into(), AgentKind::LeadScorer, "Audit leads", now());
        task.status = AgentTaskStatus::Running;
        task.progress = progress;
        task
    }

    #[test]
    fn assign_creates_pending_task_and_log() {
        let (task, log) = assign(AgentKind::CampaignGen, "  Draft Q3 outreach ", now()).unwrap();
        assert!(task.id.starts_with("tsk-"));
        assert_eq!(task.status, AgentTaskStatus::Pending);
        assert_eq!(task.progress, 0);
        assert_eq!(task.agent_name, "Campaign Gen Agent");
        assert_eq!(log.msg, "Task Assigned: Draft Q3 outreach");
        assert_eq!(log.kind, LogKind::Info);
    }

    #[test]
    fn blank_description_is_rejected() {
        assert!(matches!(
            assign(AgentKind::LeadScorer, " ", now()),
            Err(AgentError::Validation(_))
        ));
    }

    #[test]
    fn pending_starts_running_without_consuming_roll() {
        let (mut task, _) = assign(AgentKind::KnowledgeRag, "Research", now()).unwrap();
        let logs = tick(std::slice::from_mut(&mut task), || unreachable!(), now());
        assert!(logs.is_empty());
        assert_eq!(task.status, AgentTaskStatus::Running);
        assert_eq!(task.progress, START_PROGRESS);
        assert_eq!(task.step, "Researching");
    }

    #[rstest]
    #[case(5, 10, 15, "Researching")]
    #[case(15, 10, 25, "Analyzing Signals")]
    #[case(45, 14, 59, "Synthesizing Response")]
    #[case(70, 5, 75, "Validating Outcome")]
    #[case(85, 14, 99, "Finalizing")]
    #[case(40, 0, 40, "Synthesizing Response")]
    fn running_advances(
        #[case] start: u8,
        #[case] roll: u8,
        #[case] expected: u8,
        #[case] step: &str,
    ) {
        let mut task = running(start);
        let logs = tick(std::slice::from_mut(&mut task), || roll, now());
        assert!(logs.is_empty());
        assert_eq!(task.progress, expected);
        assert_eq!(task.step, step);
    }

    #[test]
    fn reaching_hundred_completes_and_logs() {
        let mut task = running(95);
        let logs = tick(std::slice::from_mut(&mut task), || 7, now());
        assert_eq!(task.status, AgentTaskStatus::Completed);
        assert_eq!(task.progress, 100);
        assert_eq!(task.step, FINISHED_STEP);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].msg, "Completed: Audit leads");
        assert_eq!(logs[0].agent, "Lead Scorer Agent");
        assert_eq!(logs[0].kind, LogKind::Success);
    }

    #[test]
    fn terminal_tasks_are_untouched() {
        let mut done = running(100);
        done.status = AgentTaskStatus::Completed;
        let mut failed = running(30);
        failed.status = AgentTaskStatus::Failed;
        let before = vec![done, failed];
        let mut tasks = before.clone();
        let logs = tick(&mut tasks, || 14, now());
        assert!(logs.is_empty());
        assert_eq!(tasks, before);
    }

    #[test]
    fn os_roll_stays_below_increment() {
        for _ in 0..50 {
            assert!(os_roll() < MAX_INCREMENT);
        }
    }

    #[tokio::test]
    async fn store_round_trip_runs_task_to_completion() {
        let store = seeded_store("proj-1").await;
        let task = assign_in(&store, AgentKind::LeadScorer, "Score new leads", now())
            .await
            .unwrap();

        let mut ticks = 0;
        loop {
            let tasks = tick_in(&store, || 14, now()).await.unwrap();
            ticks += 1;
            if tasks[0].status == AgentTaskStatus::Completed {
                break;
            }
            assert!(ticks < 20, "task never completed");
        }
        // one start tick, then 5 + 14 * 7 = 103
        assert_eq!(ticks, 8);

        let tasks = store.agent_tasks().await.unwrap();
        assert_eq!(tasks[0].id, task.id);
        let logs = store.agent_logs().await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].msg, "Completed: Score new leads");
        assert_eq!(logs[1].msg, "Task Assigned: Score new leads");
    }

    #[tokio::test(start_paused = true)]
    async fn watch_ticks_on_the_interval_until_idle() {
        let store = seeded_store("proj-1").await;
        assign_in(&store, AgentKind::CampaignGen, "Draft Pune sequence", now())
            .await
            .unwrap();

        let start = tokio::time::Instant::now();
        let mut seen = Vec::new();
        let (tasks, ticks) = watch_in(&store, Duration::from_millis(1500), || 14, |board| {
            seen.push(board[0].progress);
        })
        .await
        .unwrap();

        assert_eq!(ticks, 8);
        assert_eq!(start.elapsed(), Duration::from_millis(8 * 1500));
        assert_eq!(seen, vec![5, 19, 33, 47, 61, 75, 89, 100]);
        assert_eq!(tasks[0].status, AgentTaskStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn watch_returns_at_once_when_nothing_is_running() {
        let store = seeded_store("proj-1").await;
        let start = tokio::time::Instant::now();
        let (tasks, ticks) = watch_in(&store, Duration::from_millis(1500), || 14, |_| {})
            .await
            .unwrap();
        assert!(tasks.is_empty());
        assert_eq!(ticks, 0);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn watch_rejects_zero_interval() {
        let store = seeded_store("proj-1").await;
        let err = watch_in(&store, Duration::ZERO, || 14, |_| {}).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation(_)));
    }
}
