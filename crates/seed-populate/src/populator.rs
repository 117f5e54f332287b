//! Run orchestration: entity stages in dependency order.

use crate::error::PopulateError;
use crate::plan::SeedPlan;
use crate::sink::BatchSink;
use seed_core::{EntityKind, Record};
use seed_generator::builders::{
    build_assignments, build_classes, build_schools, build_subjects, build_users,
    AssignmentBounds,
};
use seed_generator::{Batch, BatchPlan, DataGenerator};
use std::collections::BTreeMap;
use std::num::NonZeroU64;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default throttle for assignment progress lines.
pub const DEFAULT_PROGRESS_EVERY: u64 = 20;

/// Metrics for one entity pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityMetrics {
    /// Rows built by the generator.
    pub rows_generated: u64,
    /// Rows persisted by storage (zero in dry-run mode).
    pub rows_written: u64,
    /// Rows dropped on conflict.
    pub rows_skipped: u64,
    /// Number of batches loaded.
    pub batch_count: u64,
    /// Time spent generating rows.
    pub generation_duration: Duration,
    /// Time spent in the loader.
    pub insert_duration: Duration,
    /// Total time for the pipeline.
    pub total_duration: Duration,
}

impl EntityMetrics {
    /// Calculate generated rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_generated as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Metrics from a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulateMetrics {
    pub entities: BTreeMap<EntityKind, EntityMetrics>,
    pub total_duration: Duration,
}

impl PopulateMetrics {
    pub fn get(&self, kind: EntityKind) -> Option<&EntityMetrics> {
        self.entities.get(&kind)
    }

    pub fn rows_generated(&self) -> u64 {
        self.entities.values().map(|m| m.rows_generated).sum()
    }

    pub fn rows_written(&self) -> u64 {
        self.entities.values().map(|m| m.rows_written).sum()
    }

    pub fn rows_skipped(&self) -> u64 {
        self.entities.values().map(|m| m.rows_skipped).sum()
    }

    /// Calculate generated rows per second over the whole run.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_generated() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Position of a run in the entity build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Users,
    Schools,
    Classes,
    Subjects,
    Assignments,
    Done,
}

impl Stage {
    /// The stage a run starts in.
    pub const FIRST: Stage = Stage::Users;

    pub fn next(self) -> Stage {
        match self {
            Stage::Users => Stage::Schools,
            Stage::Schools => Stage::Classes,
            Stage::Classes => Stage::Subjects,
            Stage::Subjects => Stage::Assignments,
            Stage::Assignments | Stage::Done => Stage::Done,
        }
    }

    /// Entity built in this stage, `None` for [`Stage::Done`].
    pub fn entity(self) -> Option<EntityKind> {
        match self {
            Stage::Users => Some(EntityKind::Users),
            Stage::Schools => Some(EntityKind::Schools),
            Stage::Classes => Some(EntityKind::Classes),
            Stage::Subjects => Some(EntityKind::Subjects),
            Stage::Assignments => Some(EntityKind::Assignments),
            Stage::Done => None,
        }
    }

    /// Entities whose final counts this stage's rows reference.
    pub fn dependencies(self) -> &'static [EntityKind] {
        match self {
            Stage::Classes => &[EntityKind::Schools],
            Stage::Assignments => &[
                EntityKind::Users,
                EntityKind::Classes,
                EntityKind::Subjects,
            ],
            _ => &[],
        }
    }
}

/// Drives the entity pipelines of one run.
///
/// Stages run strictly one after another and batches within a stage never
/// overlap: a batch is generated, loaded, and acknowledged before the next
/// one is generated.
pub struct Seeder {
    generator: DataGenerator,
    plan: SeedPlan,
    progress_every: NonZeroU64,
    stage: Stage,
    /// Final row counts of finished stages.
    finished: BTreeMap<EntityKind, u64>,
    metrics: PopulateMetrics,
}

impl Seeder {
    pub fn new(generator: DataGenerator, plan: SeedPlan) -> Self {
        Self {
            generator,
            plan,
            progress_every: NonZeroU64::new(DEFAULT_PROGRESS_EVERY).unwrap_or(NonZeroU64::MIN),
            stage: Stage::FIRST,
            finished: BTreeMap::new(),
            metrics: PopulateMetrics::default(),
        }
    }

    /// Report assignment progress only every `every` batches.
    pub fn with_progress_every(mut self, every: NonZeroU64) -> Self {
        self.progress_every = every;
        self
    }

    pub fn plan(&self) -> &SeedPlan {
        &self.plan
    }

    /// The next stage to run.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Final row count of `kind`, once its stage has finished.
    pub fn finished_count(&self, kind: EntityKind) -> Option<u64> {
        self.finished.get(&kind).copied()
    }

    pub fn metrics(&self) -> &PopulateMetrics {
        &self.metrics
    }

    /// Run every remaining stage to completion.
    pub async fn run<S: BatchSink>(&mut self, sink: &mut S) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();

        info!(
            "Seeding {} rows (users={}, schools={}, classes={}, subjects={}, assignments={}, seed={})",
            self.plan.total_rows(),
            self.plan.users,
            self.plan.schools,
            self.plan.classes,
            self.plan.subjects(),
            self.plan.assignments,
            self.generator.seed()
        );

        while self.stage != Stage::Done {
            self.run_stage(self.stage, sink).await?;
            self.stage = self.stage.next();
        }

        self.metrics.total_duration += start_time.elapsed();

        info!(
            "Seeding complete: {} rows generated, {} written, {} skipped in {:?} ({:.2} rows/sec)",
            self.metrics.rows_generated(),
            self.metrics.rows_written(),
            self.metrics.rows_skipped(),
            self.metrics.total_duration,
            self.metrics.rows_per_second()
        );

        Ok(self.metrics.clone())
    }

    /// Run a single stage. Fails if a stage it depends on has not finished.
    pub async fn run_stage<S: BatchSink>(
        &mut self,
        stage: Stage,
        sink: &mut S,
    ) -> Result<EntityMetrics, PopulateError> {
        let Some(entity) = stage.entity() else {
            return Ok(EntityMetrics::default());
        };
        for dependency in stage.dependencies() {
            if !self.finished.contains_key(dependency) {
                return Err(PopulateError::StageOrder {
                    entity,
                    dependency: *dependency,
                });
            }
        }

        let sizes = self.plan.batch_sizes;
        let metrics = match stage {
            Stage::Users => {
                let plan = BatchPlan::new(self.plan.users, sizes.users);
                self.load_pipeline(entity, plan, false, sink, build_users)
                    .await?
            }
            Stage::Schools => {
                let plan = BatchPlan::new(self.plan.schools, sizes.schools);
                self.load_pipeline(entity, plan, false, sink, build_schools)
                    .await?
            }
            Stage::Classes => {
                let plan = BatchPlan::new(self.plan.classes, sizes.classes);
                if plan.total() == 0 {
                    skipped(entity)
                } else {
                    let schools = self.reference(entity, EntityKind::Schools)?;
                    self.load_pipeline(entity, plan, false, sink, move |generator, batch| {
                        build_classes(generator, batch, schools)
                    })
                    .await?
                }
            }
            Stage::Subjects => {
                let subjects = build_subjects();
                let plan = BatchPlan::new(subjects.len() as u64, subjects.len());
                let mut pending = Some(subjects);
                self.load_pipeline(entity, plan, false, sink, move |_, _| {
                    pending.take().unwrap_or_default()
                })
                .await?
            }
            Stage::Assignments => {
                let plan = BatchPlan::new(self.plan.assignments, sizes.assignments);
                if plan.total() == 0 {
                    skipped(entity)
                } else {
                    let bounds = AssignmentBounds {
                        users: self.reference(entity, EntityKind::Users)?,
                        classes: self.reference(entity, EntityKind::Classes)?,
                        subjects: self.reference(entity, EntityKind::Subjects)?,
                    };
                    self.load_pipeline(entity, plan, true, sink, move |generator, batch| {
                        build_assignments(generator, batch, bounds)
                    })
                    .await?
                }
            }
            Stage::Done => EntityMetrics::default(),
        };

        self.finished.insert(entity, metrics.rows_generated);
        self.metrics.entities.insert(entity, metrics.clone());
        Ok(metrics)
    }

    /// Finalized, non-zero count of `referenced` for building `entity`.
    fn reference(
        &self,
        entity: EntityKind,
        referenced: EntityKind,
    ) -> Result<NonZeroU64, PopulateError> {
        self.finished
            .get(&referenced)
            .copied()
            .and_then(NonZeroU64::new)
            .ok_or(PopulateError::MissingReference { entity, referenced })
    }

    /// Generate and load every batch of one entity.
    async fn load_pipeline<R, S, F>(
        &mut self,
        entity: EntityKind,
        plan: BatchPlan,
        throttled: bool,
        sink: &mut S,
        mut build: F,
    ) -> Result<EntityMetrics, PopulateError>
    where
        R: Record,
        S: BatchSink,
        F: FnMut(&mut DataGenerator, &Batch) -> Vec<R>,
    {
        let total = plan.total();
        if total == 0 {
            return Ok(skipped(entity));
        }

        let start_time = Instant::now();
        let mut metrics = EntityMetrics::default();

        for batch in plan {
            let gen_start = Instant::now();
            let rows = build(&mut self.generator, &batch);
            metrics.generation_duration += gen_start.elapsed();

            if rows.len() != batch.size {
                warn!(
                    "{} batch {} built {} rows, expected {}",
                    entity,
                    batch.number,
                    rows.len(),
                    batch.size
                );
            }

            let insert_start = Instant::now();
            let outcome = sink
                .load(&rows)
                .await
                .map_err(|e| e.in_batch(entity, batch.number))?;
            metrics.insert_duration += insert_start.elapsed();

            metrics.rows_generated += rows.len() as u64;
            metrics.rows_written += outcome.written;
            metrics.rows_skipped += outcome.skipped;
            metrics.batch_count += 1;

            debug!(
                "{} batch {} complete: {} rows, {} written, {} skipped",
                entity,
                batch.number,
                rows.len(),
                outcome.written,
                outcome.skipped
            );

            let is_last = batch.end() == total;
            if progress_due(batch.number, self.progress_every, throttled, is_last) {
                report_progress(entity, metrics.rows_generated, total, sink.is_dry_run());
            }
        }

        metrics.total_duration = start_time.elapsed();

        info!(
            "Finished {}: {} rows in {} batches in {:?} ({:.2} rows/sec)",
            entity,
            metrics.rows_generated,
            metrics.batch_count,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

fn skipped(entity: EntityKind) -> EntityMetrics {
    info!("Skipping {}: nothing to generate", entity);
    EntityMetrics::default()
}

/// Throttled pipelines report the first of every `every` batches and the
/// last one; others report every batch.
fn progress_due(batch_number: u64, every: NonZeroU64, throttled: bool, is_last: bool) -> bool {
    !throttled || is_last || (batch_number - 1) % every.get() == 0
}

fn report_progress(entity: EntityKind, done: u64, total: u64, dry_run: bool) {
    if dry_run {
        info!("DRY RUN - {} generated: {}/{}", entity, done, total);
    } else {
        info!("Inserted {}: {}/{}", entity, done, total);
    }
}

/// Run `seeder` against `sink`, then close the sink whatever the outcome.
///
/// A run failure takes precedence over a failure to close.
pub async fn run_to_completion<S: BatchSink>(
    seeder: &mut Seeder,
    sink: &mut S,
) -> Result<PopulateMetrics, PopulateError> {
    let result = seeder.run(sink).await;
    let closed = sink.close().await;

    match (result, closed) {
        (Ok(metrics), Ok(())) => Ok(metrics),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!("Failed to release storage after error: {}", close_err);
            Err(e)
        }
    }
}
