//! Assembles typed collections and id indices from tokenized tables.

use std::collections::HashMap;

use crate::domain::{Activity, Assignment, Project, Relationship, Resource, WbsNode};
use crate::schema::schema_for;
use crate::tokenizer::{tokenize, RawTables};

/// The fully assembled, read-only schedule model for one loaded file.
///
/// All entities keep their source ids as opaque strings. A table
/// absent from the file yields an empty collection; analytics over an
/// empty collection degrades gracefully instead of failing. The model
/// is never mutated after assembly, so sharing it across readers is
/// safe.
#[derive(Debug, Default)]
pub struct Model {
    pub projects: Vec<Project>,
    pub activities: Vec<Activity>,
    pub wbs_nodes: Vec<WbsNode>,
    pub resources: Vec<Resource>,
    pub relationships: Vec<Relationship>,
    pub assignments: Vec<Assignment>,
    activity_index: HashMap<String, usize>,
    wbs_index: HashMap<String, usize>,
    resource_index: HashMap<String, usize>,
}

impl Model {
    /// Parse raw XER text into a model. Never fails; a file the
    /// tokenizer cannot make sense of yields an empty model.
    pub fn parse(text: &str) -> Self {
        Self::from_tables(&tokenize(text))
    }

    /// Build the model from already-tokenized tables.
    pub fn from_tables(tables: &RawTables) -> Self {
        let mut model = Self {
            projects: collect(tables, "PROJECT", Project::from_record),
            activities: collect(tables, "TASK", Activity::from_record),
            wbs_nodes: collect(tables, "PROJWBS", WbsNode::from_record),
            resources: collect(tables, "RSRC", Resource::from_record),
            relationships: collect(tables, "TASKPRED", Relationship::from_record),
            assignments: collect(tables, "TASKRSRC", Assignment::from_record),
            ..Default::default()
        };

        model.activity_index = index_by(&model.activities, |a| &a.id);
        model.wbs_index = index_by(&model.wbs_nodes, |w| &w.id);
        model.resource_index = index_by(&model.resources, |r| &r.id);

        tracing::debug!(
            projects = model.projects.len(),
            activities = model.activities.len(),
            wbs_nodes = model.wbs_nodes.len(),
            resources = model.resources.len(),
            relationships = model.relationships.len(),
            assignments = model.assignments.len(),
            "assembled schedule model"
        );

        model
    }

    /// The project the engine reports on. `None` is the "no projects
    /// found" condition callers surface to the user.
    pub fn first_project(&self) -> Option<&Project> {
        self.projects.first()
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activity_index.get(id).map(|&i| &self.activities[i])
    }

    pub fn wbs_node(&self, id: &str) -> Option<&WbsNode> {
        self.wbs_index.get(id).map(|&i| &self.wbs_nodes[i])
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resource_index.get(id).map(|&i| &self.resources[i])
    }

    /// Activities belonging to one project, in file order.
    pub fn activities_for(&self, project_id: &str) -> impl Iterator<Item = &Activity> {
        let project_id = project_id.to_string();
        self.activities
            .iter()
            .filter(move |a| a.project_id == project_id)
    }

    pub fn assignments_for_resource(&self, resource_id: &str) -> impl Iterator<Item = &Assignment> {
        let resource_id = resource_id.to_string();
        self.assignments
            .iter()
            .filter(move |a| a.resource_id == resource_id)
    }

    pub fn assignments_for_activity(&self, activity_id: &str) -> impl Iterator<Item = &Assignment> {
        let activity_id = activity_id.to_string();
        self.assignments
            .iter()
            .filter(move |a| a.activity_id == activity_id)
    }

    /// Relationships entering an activity (it is the successor).
    pub fn predecessors_of(&self, activity_id: &str) -> impl Iterator<Item = &Relationship> {
        let activity_id = activity_id.to_string();
        self.relationships
            .iter()
            .filter(move |r| r.successor_id == activity_id)
    }

    /// Relationships leaving an activity (it is the predecessor).
    pub fn successors_of(&self, activity_id: &str) -> impl Iterator<Item = &Relationship> {
        let activity_id = activity_id.to_string();
        self.relationships
            .iter()
            .filter(move |r| r.predecessor_id == activity_id)
    }
}

fn collect<T>(
    tables: &RawTables,
    table: &str,
    build: impl Fn(&crate::schema::TypedRecord) -> T,
) -> Vec<T> {
    let Some(schema) = schema_for(table) else {
        return Vec::new();
    };
    tables
        .get(table)
        .map(|rows| rows.iter().map(|raw| build(&schema.project(raw))).collect())
        .unwrap_or_default()
}

fn index_by<T>(items: &[T], id: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (id(item).to_string(), i))
        .collect()
}
