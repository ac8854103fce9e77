use strand_lib::{
  Error,
  History,
  Pipeline,
  Severity,
};

const MAX_INITIAL_BYTES: usize = 256;
const MAX_OPS: usize = 128;
const MAX_ARG_BYTES: usize = 32;

#[derive(Debug, Clone)]
pub enum Op {
  Append(String),
  Upper,
  Kebab,
  Trim(String),
  RevertToPrevious,
  RevertToIndex(usize),
  RevertToOriginal,
  RevertFirstMatching(String),
  CompareHamming(String),
}

pub struct Scenario {
  pub initial:  String,
  pub capacity: Option<usize>,
  pub ops:      Vec<Op>,
}

/// A plain model of the snapshot log the pipeline is expected to keep.
pub struct Model {
  pub value:    String,
  pub original: String,
  pub fault:    Option<Severity>,
  pub log:      Option<(Vec<String>, usize)>,
}

impl Model {
  pub fn new(scenario: &Scenario) -> Self {
    Self {
      value:    scenario.initial.clone(),
      original: scenario.initial.clone(),
      fault:    None,
      log:      scenario.capacity.map(|capacity| {
        let mut log = Vec::new();
        push(&mut log, capacity, scenario.initial.clone());
        (log, capacity)
      }),
    }
  }

  fn gate_open(&self) -> bool {
    self.fault.is_none() || !self.value.is_empty()
  }

  fn set_value(&mut self, value: String) {
    if let Some((log, capacity)) = self.log.as_mut() {
      push(log, *capacity, value.clone());
    }
    self.value = value;
  }

  fn fail(&mut self, severity: Severity) {
    self.fault = Some(severity);
    if severity.is_fatal() {
      self.set_value(String::new());
    }
  }

  fn revert_to(&mut self, index: Option<usize>) {
    let Some((log, _)) = self.log.as_mut() else {
      self.fail(Severity::NonFatal);
      return;
    };
    match index.filter(|&index| index < log.len()) {
      Some(index) => {
        log.truncate(index + 1);
        self.value = log[index].clone();
      },
      None => self.fail(Severity::Fatal),
    }
  }

  pub fn apply(&mut self, op: &Op) {
    match op {
      Op::RevertToOriginal => self.value = self.original.clone(),
      Op::RevertToPrevious => {
        let index = self
          .log
          .as_ref()
          .map(|(log, _)| log.len().checked_sub(2));
        match index {
          Some(index) => self.revert_to(index),
          None => self.fail(Severity::NonFatal),
        }
      },
      Op::RevertToIndex(index) => self.revert_to(Some(*index)),
      Op::RevertFirstMatching(needle) => {
        let index = self.log.as_ref().map(|(log, _)| {
          log.iter().position(|snapshot| snapshot.contains(needle.as_str()))
        });
        match index {
          Some(index) => self.revert_to(index),
          None => self.fail(Severity::NonFatal),
        }
      },
      _ if !self.gate_open() => {},
      Op::CompareHamming(other) => {
        if self.value.chars().count() != other.chars().count() {
          self.fail(Severity::NonFatal);
        }
      },
      Op::Append(_) | Op::Upper | Op::Kebab | Op::Trim(_) => {
        let next = apply_op(Pipeline::new(self.value.clone()), op).into_string();
        self.set_value(next);
      },
    }
  }
}

fn push(log: &mut Vec<String>, capacity: usize, value: String) {
  log.push(value);
  while log.len() > capacity {
    log.remove(0);
  }
}

pub fn apply_op(pipeline: Pipeline, op: &Op) -> Pipeline {
  match op {
    Op::Append(suffix) => pipeline.append(suffix, "-"),
    Op::Upper => pipeline.to_upper_case(),
    Op::Kebab => pipeline.to_kebab_case(false),
    Op::Trim(set) => pipeline.trim_chars(set),
    Op::RevertToPrevious => pipeline.revert_to_previous(),
    Op::RevertToIndex(index) => pipeline.revert_to_index(*index),
    Op::RevertToOriginal => pipeline.revert_to_original(),
    Op::RevertFirstMatching(needle) => {
      pipeline.revert_with(|history| history.position(|s| s.contains(needle.as_str())))
    },
    Op::CompareHamming(other) => pipeline.compare_hamming(other),
  }
}

pub fn assert_matches(pipeline: &Pipeline, model: &Model) {
  assert_eq!(pipeline.as_str(), model.value);
  assert_eq!(pipeline.original(), model.original);
  assert_eq!(pipeline.severity(), model.fault);
  assert_eq!(
    pipeline.history().map(History::to_vec),
    model.log.as_ref().map(|(log, _)| log.clone())
  );
  if pipeline.severity() == Some(Severity::Fatal) && !pipeline.should_continue() {
    assert!(pipeline.as_str().is_empty());
  }
  if let Some(Error::HistoryNotInitialized) = pipeline.error() {
    assert!(pipeline.history().is_none());
  }
}

pub fn scenario_from_bytes(data: &[u8]) -> Scenario {
  let mut cursor = ByteCursor::new(data);
  let initial_len = cursor.next_usize(MAX_INITIAL_BYTES);
  let initial = lossy_text(cursor.next_bytes(initial_len));
  let capacity = match cursor.next_u8() {
    0 => None,
    n => Some(n as usize % 16),
  };
  let op_count = cursor.next_usize(MAX_OPS);
  let mut ops = Vec::with_capacity(op_count);
  for _ in 0..op_count {
    let op = match cursor.next_u8() % 9 {
      0 => Op::Append(cursor.next_text()),
      1 => Op::Upper,
      2 => Op::Kebab,
      3 => Op::Trim(cursor.next_text()),
      4 => Op::RevertToPrevious,
      5 => Op::RevertToIndex(cursor.next_u8() as usize % 20),
      6 => Op::RevertToOriginal,
      7 => Op::RevertFirstMatching(cursor.next_text()),
      _ => Op::CompareHamming(cursor.next_text()),
    };
    ops.push(op);
  }

  Scenario {
    initial,
    capacity,
    ops,
  }
}

fn lossy_text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}

struct ByteCursor<'a> {
  data: &'a [u8],
  pos:  usize,
}

impl<'a> ByteCursor<'a> {
  fn new(data: &'a [u8]) -> Self {
    Self { data, pos: 0 }
  }

  fn next_u8(&mut self) -> u8 {
    let value = self.data.get(self.pos).copied().unwrap_or(0);
    self.pos = self.pos.saturating_add(1);
    value
  }

  fn next_u16(&mut self) -> u16 {
    let lo = self.next_u8() as u16;
    let hi = self.next_u8() as u16;
    lo | (hi << 8)
  }

  fn next_usize(&mut self, max: usize) -> usize {
    if max == 0 {
      return 0;
    }
    (self.next_u16() as usize) % (max + 1)
  }

  fn next_bytes(&mut self, len: usize) -> &'a [u8] {
    let start = self.pos.min(self.data.len());
    let end = start.saturating_add(len).min(self.data.len());
    self.pos = end;
    &self.data[start..end]
  }

  fn next_text(&mut self) -> String {
    let len = self.next_usize(MAX_ARG_BYTES);
    lossy_text(self.next_bytes(len))
  }
}
