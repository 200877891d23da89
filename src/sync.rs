//! The single-pass sync job: resolve identity, find the week's plan record,
//! then create-or-update one comment per weekday.

use plansync_core::{
    config::Config,
    error::SyncError,
    message::{day_header, day_message},
    model::PlanRecord,
    traits::PlanningService,
    week::{weekday_name, WeekWindow},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Number of weekday comments written per plan record (Monday through Friday).
const WEEKDAYS: u32 = 5;

/// Outcome counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
}

/// One run of the weekly comment sync. The service handle is injected so
/// the loop never touches a global client.
pub struct SyncJob {
    service: Arc<dyn PlanningService>,
    workspace: String,
    window: WeekWindow,
    delay: Duration,
}

impl SyncJob {
    pub fn new(service: Arc<dyn PlanningService>, cfg: &Config) -> Self {
        Self {
            service,
            workspace: cfg.workspace_id.clone(),
            window: cfg.window,
            delay: Duration::from_millis(cfg.delay_ms),
        }
    }

    /// Run the whole job. Any fault aborts the remaining days; days already
    /// written stay written.
    pub async fn run(&self) -> Result<SyncReport, SyncError> {
        let me = self.service.current_user().await?;
        info!("running as {} ({})", me.name, me.gid);

        let plan = self.resolve_plan(&me.gid).await?;
        info!("plan record: {} ({})", plan.name, plan.gid);

        let comments = self.service.list_comments(&plan.gid).await?;
        let mut report = SyncReport::default();

        for offset in 0..WEEKDAYS {
            let date = self.window.day(offset);
            let weekday = weekday_name(date);
            let tasks = self
                .service
                .tasks_due_on(&self.workspace, &me.gid, date)
                .await?;

            let text = day_message(weekday, &tasks);
            let header = day_header(weekday);

            match comments.iter().find(|c| c.text.starts_with(&header)) {
                Some(existing) => {
                    info!(
                        "{weekday}: updating comment {} ({} task(s))",
                        existing.gid,
                        tasks.len()
                    );
                    self.service.update_comment(&existing.gid, &text).await?;
                    report.updated += 1;
                }
                None => {
                    info!("{weekday}: creating comment ({} task(s))", tasks.len());
                    self.service.create_comment(&plan.gid, &text).await?;
                    report.created += 1;
                }
            }

            // The remote service orders near-simultaneous comments
            // unpredictably; space the writes out so viewers see the days
            // in chronological order.
            tokio::time::sleep(self.delay).await;
        }

        Ok(report)
    }

    /// Exactly one plan record must exist in the window; zero or several is
    /// a precondition failure, not something to disambiguate.
    async fn resolve_plan(&self, me: &str) -> Result<PlanRecord, SyncError> {
        let mut plans = self
            .service
            .find_plan_records(&self.workspace, me, &self.window)
            .await?;
        match plans.len() {
            1 => Ok(plans.remove(0)),
            n => Err(SyncError::Precondition(format!(
                "expected exactly one plan record in the week starting {}, found {n}",
                self.window.start
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use plansync_core::model::{Comment, Identity, TaskSummary};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Write {
        Created { record: String, text: String },
        Updated { comment: String, text: String },
    }

    /// Recording stand-in for the remote service.
    #[derive(Default)]
    struct MockService {
        plans: Vec<PlanRecord>,
        comments: Vec<Comment>,
        tasks_by_date: HashMap<NaiveDate, Vec<TaskSummary>>,
        writes: Mutex<Vec<Write>>,
    }

    impl MockService {
        fn writes(&self) -> Vec<Write> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlanningService for MockService {
        async fn current_user(&self) -> Result<Identity, SyncError> {
            Ok(Identity {
                gid: "me-1".into(),
                name: "Ada".into(),
            })
        }

        async fn find_plan_records(
            &self,
            _workspace: &str,
            _author: &str,
            _window: &WeekWindow,
        ) -> Result<Vec<PlanRecord>, SyncError> {
            Ok(self.plans.clone())
        }

        async fn list_comments(&self, _record_gid: &str) -> Result<Vec<Comment>, SyncError> {
            Ok(self.comments.clone())
        }

        async fn tasks_due_on(
            &self,
            _workspace: &str,
            _assignee: &str,
            date: NaiveDate,
        ) -> Result<Vec<TaskSummary>, SyncError> {
            Ok(self.tasks_by_date.get(&date).cloned().unwrap_or_default())
        }

        async fn create_comment(&self, record_gid: &str, text: &str) -> Result<(), SyncError> {
            self.writes.lock().unwrap().push(Write::Created {
                record: record_gid.into(),
                text: text.into(),
            });
            Ok(())
        }

        async fn update_comment(&self, comment_gid: &str, text: &str) -> Result<(), SyncError> {
            self.writes.lock().unwrap().push(Write::Updated {
                comment: comment_gid.into(),
                text: text.into(),
            });
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan(gid: &str) -> PlanRecord {
        PlanRecord {
            gid: gid.into(),
            name: "This week's plan submission".into(),
            created_at: None,
        }
    }

    fn task(gid: &str, name: &str) -> TaskSummary {
        TaskSummary {
            gid: gid.into(),
            name: name.into(),
        }
    }

    fn job(service: Arc<MockService>) -> SyncJob {
        let cfg = Config {
            token: "pat-test".into(),
            workspace_id: "ws-1".into(),
            window: WeekWindow::containing(date(2024, 3, 4)),
            delay_ms: 0,
        };
        SyncJob::new(service, &cfg)
    }

    #[tokio::test]
    async fn test_zero_plans_aborts_with_no_writes() {
        let service = Arc::new(MockService::default());
        let err = job(service.clone()).run().await.unwrap_err();
        assert!(matches!(err, SyncError::Precondition(_)));
        assert!(service.writes().is_empty());
    }

    #[tokio::test]
    async fn test_two_plans_aborts_with_no_writes() {
        let service = Arc::new(MockService {
            plans: vec![plan("p1"), plan("p2")],
            ..Default::default()
        });
        let err = job(service.clone()).run().await.unwrap_err();
        assert!(matches!(err, SyncError::Precondition(_)));
        assert!(err.to_string().contains("found 2"));
        assert!(service.writes().is_empty());
    }

    #[tokio::test]
    async fn test_monday_tasks_create_new_comment() {
        let mut tasks_by_date = HashMap::new();
        tasks_by_date.insert(
            date(2024, 3, 4),
            vec![task("t1", "Write spec"), task("t2", "Review PR")],
        );
        let service = Arc::new(MockService {
            plans: vec![plan("p1")],
            tasks_by_date,
            ..Default::default()
        });

        job(service.clone()).run().await.unwrap();

        let writes = service.writes();
        assert_eq!(
            writes[0],
            Write::Created {
                record: "p1".into(),
                text: "🗓️ Monday\n\n🔍 Write spec\n🔍 Review PR".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_existing_tuesday_comment_is_updated_not_duplicated() {
        let service = Arc::new(MockService {
            plans: vec![plan("p1")],
            comments: vec![Comment {
                gid: "c-tue".into(),
                text: "🗓️ Tuesday\n\n🔍 Old entry".into(),
            }],
            ..Default::default()
        });

        job(service.clone()).run().await.unwrap();

        let tuesday: Vec<_> = service
            .writes()
            .into_iter()
            .filter(|w| match w {
                Write::Created { text, .. } | Write::Updated { text, .. } => {
                    text.starts_with("🗓️ Tuesday\n")
                }
            })
            .collect();
        assert_eq!(
            tuesday,
            vec![Write::Updated {
                comment: "c-tue".into(),
                text: "🗓️ Tuesday\n\n🏝️ No tasks defined.".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_prefix_match_catches_any_body() {
        // Matching is on the header prefix only, whatever follows it.
        let service = Arc::new(MockService {
            plans: vec![plan("p1")],
            comments: vec![Comment {
                gid: "c-mon".into(),
                text: "🗓️ Monday\nfoo".into(),
            }],
            ..Default::default()
        });

        let report = job(service.clone()).run().await.unwrap();
        assert_eq!(report.updated, 1);
        assert_eq!(report.created, 4);
        assert!(matches!(
            &service.writes()[0],
            Write::Updated { comment, .. } if comment == "c-mon"
        ));
    }

    #[tokio::test]
    async fn test_full_week_writes_five_days_in_order() {
        let service = Arc::new(MockService {
            plans: vec![plan("p1")],
            ..Default::default()
        });

        let report = job(service.clone()).run().await.unwrap();
        assert_eq!(report.created, 5);
        assert_eq!(report.updated, 0);

        let headers: Vec<String> = service
            .writes()
            .into_iter()
            .map(|w| match w {
                Write::Created { text, .. } | Write::Updated { text, .. } => {
                    text.lines().next().unwrap_or_default().to_string()
                }
            })
            .collect();
        assert_eq!(
            headers,
            vec![
                "🗓️ Monday",
                "🗓️ Tuesday",
                "🗓️ Wednesday",
                "🗓️ Thursday",
                "🗓️ Friday"
            ]
        );
    }
}
