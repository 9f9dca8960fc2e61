/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

use rand::{Rng, rngs::ThreadRng};

const TREE_NAMES: [&str; 12] = [
    "oak", "ash", "elm", "fir", "yew", "pine", "birch", "cedar", "maple", "willow",
    "alder", "larch",
];

const STONE_NAMES: [&str; 12] = [
    "agate", "basalt", "chalk", "flint", "garnet", "granite", "jade", "jasper", "marble",
    "onyx", "opal", "quartz",
];

/// Readable random id like `cedar-flint-042-7f3a91c2`, used to name temp folders.
///
/// The trailing hex run keeps ids unique across concurrently running tests.
#[must_use]
pub fn generate_friendly_random_id() -> String {
    let mut rng: ThreadRng = rand::rng();

    let tree = TREE_NAMES[rng.random_range(0..TREE_NAMES.len())];
    let stone = STONE_NAMES[rng.random_range(0..STONE_NAMES.len())];
    let number: u16 = rng.random_range(0..1000);
    let suffix: u32 = rng.random();

    format!("{tree}-{stone}-{number:03}-{suffix:08x}")
}
