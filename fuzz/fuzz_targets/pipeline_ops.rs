#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use strand_lib::Pipeline;

use crate::common::{
  Model,
  apply_op,
  assert_matches,
  scenario_from_bytes,
};

fuzz_target!(|data: &[u8]| {
  let scenario = scenario_from_bytes(data);
  let mut model = Model::new(&scenario);
  let mut pipeline = Pipeline::new(scenario.initial.clone());
  if let Some(capacity) = scenario.capacity {
    pipeline = pipeline.with_history(capacity);
  }
  assert_matches(&pipeline, &model);

  for op in &scenario.ops {
    pipeline = apply_op(pipeline, op);
    model.apply(op);
    assert_matches(&pipeline, &model);
  }
});
