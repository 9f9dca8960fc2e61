/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use gapbuf::{GapBuffer, SlotArena};
use pretty_assertions::assert_eq;

#[test]
fn test_arena_of_gap_buffers() {
    let mut arena = SlotArena::new();
    let ids: Vec<_> = ["one", "two", "three"]
        .into_iter()
        .map(|text| {
            let mut buffer = GapBuffer::new(16).unwrap();
            buffer.insert_str(text).unwrap();
            arena.insert(buffer)
        })
        .collect();

    arena.get_mut(ids[1]).unwrap().insert_str("!").unwrap();
    assert_eq!(arena.get(ids[1]).unwrap().to_string(), "two!");

    // Freeing a buffer invalidates its id, and the next buffer reuses the slot.
    let removed = arena.remove(ids[0]).unwrap();
    assert_eq!(removed.to_string(), "one");
    assert!(arena.get(ids[0]).is_none());

    let reused = arena.insert(GapBuffer::new(8).unwrap());
    assert_eq!(reused.index, ids[0].index);
    assert!(arena.get(ids[0]).is_none());
    assert!(arena.get(reused).unwrap().is_empty());

    let texts: Vec<String> = arena.iter().map(|(_, it)| it.to_string()).collect();
    assert_eq!(texts, vec!["", "two!", "three"]);
    assert_eq!(arena.len(), 3);
    assert_eq!(arena.slot_count(), 3);
}
