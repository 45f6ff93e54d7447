//! Day 8: walking the left/right node network.
//!
//! Part one follows a single walker from `AAA` to `ZZZ`. Part two runs one
//! walker per start node and asks when all of them stand on end nodes at the
//! same step. Each walker is traced until its `(node, instruction index)` pair
//! repeats; from that point on its behavior is periodic, and the answer is the
//! least common multiple of the per-walker offsets.

use std::collections::HashMap;
use std::sync::LazyLock;

use num::{BigUint, Integer, One, Zero};
use regex::Regex;
use tracing::{debug, info};

use crate::core::error::{PuzzleError, PuzzleResult};

static NODE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*=\s*\(\s*(\w+)\s*,\s*(\w+)\s*\)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
}

impl TryFrom<char> for Turn {
    type Error = PuzzleError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            other => Err(PuzzleError::malformed(format!(
                "unexpected instruction '{other}'"
            ))),
        }
    }
}

/// Non-empty left/right sequence, consumed cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions(Vec<Turn>);

impl Instructions {
    pub fn parse(line: &str) -> PuzzleResult<Self> {
        let turns = line
            .trim()
            .chars()
            .map(Turn::try_from)
            .collect::<PuzzleResult<Vec<_>>>()?;
        if turns.is_empty() {
            return Err(PuzzleError::malformed("instruction sequence is empty"));
        }
        Ok(Self(turns))
    }

    /// Index and turn to take at `step`, wrapping around the sequence.
    pub fn at(&self, step: u64) -> (usize, Turn) {
        let index = (step % self.0.len() as u64) as usize;
        (index, self.0[index])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub left: String,
    pub right: String,
}

impl Node {
    pub fn neighbor(&self, turn: Turn) -> &str {
        match turn {
            Turn::Left => &self.left,
            Turn::Right => &self.right,
        }
    }
}

/// Parsed map document: the instruction sequence and the labeled nodes.
///
/// Read-only once parsed; walkers keep their own state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    instructions: Instructions,
    nodes: HashMap<String, Node>,
}

impl Network {
    pub fn parse(input: &str) -> PuzzleResult<Self> {
        let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());
        let header = lines
            .next()
            .ok_or_else(|| PuzzleError::malformed("missing instruction line"))?;
        let instructions = Instructions::parse(header)?;

        let mut nodes = HashMap::new();
        for line in lines {
            let node = parse_node(line)?;
            if nodes.contains_key(&node.label) {
                return Err(PuzzleError::malformed(format!(
                    "node '{}' is defined twice",
                    node.label
                )));
            }
            nodes.insert(node.label.clone(), node);
        }
        if nodes.is_empty() {
            return Err(PuzzleError::malformed("network has no nodes"));
        }
        Ok(Self {
            instructions,
            nodes,
        })
    }

    pub fn instructions(&self) -> &Instructions {
        &self.instructions
    }

    pub fn node(&self, label: &str) -> PuzzleResult<&Node> {
        self.nodes
            .get(label)
            .ok_or_else(|| PuzzleError::lookup(format!("node '{label}' is not defined")))
    }

    fn next_node(&self, node: &Node, turn: Turn) -> PuzzleResult<&Node> {
        let label = node.neighbor(turn);
        self.nodes.get(label).ok_or_else(|| {
            PuzzleError::lookup(format!(
                "node '{label}' referenced by '{}' is not defined",
                node.label
            ))
        })
    }

    /// Labels accepted by `predicate`, sorted.
    pub fn labels_where(&self, predicate: impl Fn(&str) -> bool) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .nodes
            .keys()
            .map(String::as_str)
            .filter(|label| predicate(label))
            .collect();
        labels.sort_unstable();
        labels
    }
}

fn parse_node(line: &str) -> PuzzleResult<Node> {
    let captures = NODE_LINE.captures(line).ok_or_else(|| {
        PuzzleError::malformed(format!("expected `LABEL = (LEFT, RIGHT)`, got '{line}'"))
    })?;
    Ok(Node {
        label: captures[1].to_string(),
        left: captures[2].to_string(),
        right: captures[3].to_string(),
    })
}

/// Where a single walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub steps: u64,
    pub label: String,
    /// Instruction index the walk would continue with.
    pub next_instruction: usize,
}

/// Walk from `start` until `is_end` holds.
///
/// The start node never counts as an arrival: at least one step is taken
/// even when `start` itself satisfies `is_end`.
pub fn steps_to_end(
    network: &Network,
    start: &str,
    is_end: impl Fn(&str) -> bool,
    max_steps: u64,
) -> PuzzleResult<Arrival> {
    let instructions = network.instructions();
    let mut node = network.node(start)?;
    let mut step: u64 = 0;
    loop {
        if step >= max_steps {
            return Err(PuzzleError::no_termination(
                step,
                format!("walk from {start} never reached an end node"),
            ));
        }
        let (_, turn) = instructions.at(step);
        node = network.next_node(node, turn)?;
        step += 1;
        if is_end(&node.label) {
            debug!(start, end = %node.label, steps = step, "walk arrived");
            return Ok(Arrival {
                steps: step,
                label: node.label.clone(),
                next_instruction: instructions.at(step).0,
            });
        }
    }
}

/// Periodic behavior of one walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub start: String,
    /// First step (at least 1) that lands on an end node.
    pub offset: u64,
    /// Step at which the repeated `(node, instruction index)` pair first occurred.
    pub cycle_start: u64,
    pub cycle_length: u64,
    /// Steps before the repeat that landed on an end node, ascending.
    pub end_steps: Vec<u64>,
}

impl CycleReport {
    /// True if the walker stands on an end node after exactly `step` steps.
    pub fn arrives_at(&self, step: &BigUint) -> bool {
        let period = BigUint::from(self.cycle_length);
        self.end_steps.iter().any(|&end| {
            let end = BigUint::from(end);
            if end < BigUint::from(self.cycle_start) {
                *step == end
            } else {
                *step >= end && ((step - &end) % &period).is_zero()
            }
        })
    }
}

/// Walk from `start` until a `(node, instruction index)` pair repeats.
///
/// The visit record lives in this call only, so walkers sharing a network
/// never see each other's history.
pub fn trace_until_repeat(
    network: &Network,
    start: &str,
    is_end: impl Fn(&str) -> bool,
    max_steps: u64,
) -> PuzzleResult<CycleReport> {
    let instructions = network.instructions();
    let mut visited: HashMap<(&str, usize), u64> = HashMap::new();
    let mut end_steps = Vec::new();
    let mut node = network.node(start)?;
    let mut step: u64 = 0;

    loop {
        let (index, turn) = instructions.at(step);
        if let Some(&first) = visited.get(&(node.label.as_str(), index)) {
            let cycle_length = step - first;
            if !end_steps.iter().any(|&end| end >= first) {
                return Err(PuzzleError::no_termination(
                    step,
                    format!(
                        "walker from {start} repeats every {cycle_length} steps \
                         without reaching an end node"
                    ),
                ));
            }
            let report = CycleReport {
                start: start.to_string(),
                offset: end_steps[0],
                cycle_start: first,
                cycle_length,
                end_steps,
            };
            debug!(
                start,
                offset = report.offset,
                cycle_start = report.cycle_start,
                cycle_length = report.cycle_length,
                "cycle detected"
            );
            return Ok(report);
        }
        if step >= max_steps {
            return Err(PuzzleError::no_termination(
                step,
                format!("walker from {start} did not repeat"),
            ));
        }
        visited.insert((node.label.as_str(), index), step);
        node = network.next_node(node, turn)?;
        step += 1;
        if is_end(&node.label) {
            end_steps.push(step);
        }
    }
}

/// First step at which every walker in `start_labels` stands on an end node.
///
/// Computed as the LCM of the walker offsets. That shortcut assumes each
/// walker's arrivals repeat with a period that divides the offset LCM, which
/// holds for the puzzle's generated inputs but not for arbitrary graphs, so the
/// result is checked against every walker's cycle before it is returned.
pub fn synchronized_arrival_step(
    network: &Network,
    start_labels: &[&str],
    is_end: impl Fn(&str) -> bool,
    max_steps: u64,
) -> PuzzleResult<BigUint> {
    if start_labels.is_empty() {
        return Err(PuzzleError::malformed("network has no start nodes"));
    }

    let reports = start_labels
        .iter()
        .map(|label| trace_until_repeat(network, label, &is_end, max_steps))
        .collect::<PuzzleResult<Vec<_>>>()?;

    let answer = reports
        .iter()
        .fold(BigUint::one(), |acc, report| lcm(&acc, &BigUint::from(report.offset)));

    if let Some(report) = reports.iter().find(|report| !report.arrives_at(&answer)) {
        return Err(PuzzleError::malformed(format!(
            "walker from {} is not on an end node at step {answer} \
             (offset {}, cycle of {} from step {})",
            report.start, report.offset, report.cycle_length, report.cycle_start
        )));
    }
    info!(walkers = reports.len(), %answer, "synchronized arrival");
    Ok(answer)
}

fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() || b.is_zero() {
        return BigUint::zero();
    }
    let gcd = a.gcd(b);
    a / &gcd * b
}
