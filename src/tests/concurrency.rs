// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::*;

use anyhow::{anyhow, Result};
use std::thread;

#[test]
fn inference_from_many_threads() -> Result<()> {
    let patterns = ["/(a)/", "/(?:a)/", "{(a)(b)}", "/a(b/", "#x\\#(y)#"];

    let handles: Vec<_> = (0..8i64)
        .map(|t| {
            thread::spawn(move || {
                let mut shapes = vec![];
                for pattern in patterns {
                    let flags = Some(Scalar::Int(if t % 2 == 0 { 0 } else { PREG_OFFSET_CAPTURE }));
                    let args = vec![Some(Scalar::from(pattern)), None, None, flags];
                    shapes.push(infer_match_shape(&args, &FoldedArguments));
                }
                shapes
            })
        })
        .collect();

    let mut results = vec![];
    for handle in handles {
        results.push(handle.join().map_err(|_| anyhow!("inference thread panicked"))?);
    }

    for (t, shapes) in results.iter().enumerate() {
        assert_eq!(shapes, &results[t % 2]);
    }

    assert_eq!(results[0][1], *STRING_LIST);
    assert_eq!(results[1][3], *OFFSET_TUPLE_LIST);
    assert_eq!(results[0][4].field_count(), Some(2));
    Ok(())
}
