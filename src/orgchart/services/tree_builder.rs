use crate::orgchart::domain::{base_code, strip_variant_suffix, DepartmentNode, DepartmentRecord};
use std::collections::{HashMap, HashSet};

/// TreeBuilder service for grouping flat department records into a forest.
///
/// This service contains pure business logic with no I/O dependencies.
/// Records sharing a base code (code minus trailing numeric variant
/// suffix) are merged under one representative node; a second pass then
/// attaches every node to its parent, resolved through the same base-code
/// normalization.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds the department forest from a flat record listing.
    ///
    /// # Arguments
    /// * `records` - departments as returned by the listing endpoint
    ///
    /// # Returns
    /// The root nodes, in first-seen input order; descendants are
    /// reachable via `children`. Every `dept_code` in the output is
    /// unique (duplicate input codes are dropped, first occurrence wins).
    pub fn build(records: Vec<DepartmentRecord>) -> Vec<DepartmentNode> {
        let nodes = Self::group_by_base_code(Self::dedupe(records));
        Self::attach_parents(nodes)
    }

    /// Drops records whose dept code was already seen, keeping the first.
    fn dedupe(records: Vec<DepartmentRecord>) -> Vec<DepartmentRecord> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|record| seen.insert(record.dept_code.clone()))
            .collect()
    }

    /// First pass: one representative node per base code, in first-seen
    /// order.
    ///
    /// A group of size one is the record verbatim. A larger group gets a
    /// synthesized representative (code = base code, name = first
    /// variant's name with the variant suffix stripped, parent = first
    /// variant's parent) whose children are the variants re-parented to
    /// the base code. If one record's code equals the base exactly, that
    /// record is the representative and only the suffixed variants become
    /// children.
    fn group_by_base_code(records: Vec<DepartmentRecord>) -> Vec<DepartmentNode> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<DepartmentRecord>> = HashMap::new();
        for record in records {
            let base = base_code(&record.dept_code).to_string();
            groups
                .entry(base.clone())
                .or_insert_with(|| {
                    order.push(base);
                    Vec::new()
                })
                .push(record);
        }

        let mut nodes = Vec::with_capacity(order.len());
        for base in order {
            let group = groups.remove(&base).unwrap_or_default();
            nodes.push(Self::representative(base, group));
        }
        nodes
    }

    fn representative(base: String, mut group: Vec<DepartmentRecord>) -> DepartmentNode {
        if group.len() == 1 {
            return DepartmentNode::from_record(group.remove(0));
        }

        let first = &group[0];
        let exact = group.iter().position(|record| record.dept_code == base);
        let (dept_name, parent_dept_code) = match exact {
            Some(i) => (group[i].dept_name.clone(), group[i].parent_dept_code.clone()),
            None => (
                strip_variant_suffix(&first.dept_name).to_string(),
                first.parent_dept_code.clone(),
            ),
        };

        let children = group
            .into_iter()
            .filter(|record| record.dept_code != base)
            .map(|mut record| {
                record.parent_dept_code = Some(base.clone());
                DepartmentNode::from_record(record)
            })
            .collect();

        DepartmentNode {
            dept_code: base,
            dept_name,
            parent_dept_code,
            children,
        }
    }

    /// Second pass: resolve every representative's parent by the base
    /// code of its `parent_dept_code`, falling back to an exact match.
    /// Nodes with no parent, an unresolvable parent, or a parent edge
    /// that would close a cycle become roots.
    fn attach_parents(nodes: Vec<DepartmentNode>) -> Vec<DepartmentNode> {
        let index: HashMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.dept_code.clone(), i))
            .collect();

        let mut parent_of: Vec<Option<usize>> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                node.parent_dept_code
                    .as_deref()
                    .and_then(|parent| {
                        index
                            .get(base_code(parent))
                            .or_else(|| index.get(parent))
                            .copied()
                    })
                    .filter(|&parent_idx| parent_idx != i)
            })
            .collect();

        // Drop any parent edge that closes a cycle (malformed input).
        for start in 0..nodes.len() {
            let mut seen = HashSet::from([start]);
            let mut current = start;
            while let Some(parent_idx) = parent_of[current] {
                if !seen.insert(parent_idx) {
                    parent_of[current] = None;
                    break;
                }
                current = parent_idx;
            }
        }

        let mut child_indexes: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut root_indexes = Vec::new();
        for (i, parent) in parent_of.iter().enumerate() {
            match parent {
                Some(parent_idx) => child_indexes[*parent_idx].push(i),
                None => root_indexes.push(i),
            }
        }

        let mut slots: Vec<Option<DepartmentNode>> = nodes.into_iter().map(Some).collect();
        root_indexes
            .into_iter()
            .map(|i| Self::assemble(i, &mut slots, &child_indexes))
            .collect()
    }

    fn assemble(
        index: usize,
        slots: &mut Vec<Option<DepartmentNode>>,
        child_indexes: &[Vec<usize>],
    ) -> DepartmentNode {
        let mut node = slots[index]
            .take()
            .expect("forest assembly visits each node exactly once");
        for &child in &child_indexes[index] {
            let child_node = Self::assemble(child, slots, child_indexes);
            node.children.push(child_node);
        }
        node
    }
}
