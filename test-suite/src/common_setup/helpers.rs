use anyhow::Error;
use cw_multi_test::{App, AppResponse};

/// Anywhere in the error chain, contract errors get wrapped by the execution context
pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    let err = res.unwrap_err();
    assert!(
        err.chain().any(|cause| cause.to_string() == expected),
        "expected error \"{expected}\", got {err:?}"
    );
}

/// Moves time forward by `seconds` and mines one block
pub fn plus_block_seconds(app: &mut App, seconds: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += 1;
    });
}

pub fn plus_blocks(app: &mut App, blocks: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(5 * blocks);
        block.height += blocks;
    });
}

/// Value of the first `key` attribute among the events of type `ty`
pub fn event_attribute(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
