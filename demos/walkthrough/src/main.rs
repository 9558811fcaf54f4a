// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Example: DynamicArray next to Vec
//
// Replays five steps on both containers and prints size and capacity:
// 1. Empty container
// 2. Three pushes
// 3. Indexed read
// 4. Erase at position 1
// 5. reserve(100), then shrink_to_fit()

use dynarray::DynamicArray;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut array: DynamicArray<i32> = DynamicArray::new();
    let mut vec: Vec<i32> = Vec::new();

    println!("Step 1: empty container");
    println!("DynamicArray: len = {}, capacity = {}", array.len(), array.capacity());
    println!("Vec:          len = {}, capacity = {}", vec.len(), vec.capacity());

    println!("\nStep 2: push 10, 20, 30");
    for value in [10, 20, 30] {
        array.push(value)?;
        vec.push(value);
    }
    assert_eq!(array, vec);
    println!("DynamicArray: len = {}", array.len());
    println!("Vec:          len = {}", vec.len());

    println!("\nStep 3: element at index 1");
    println!("DynamicArray: {}", array.at(1)?);
    println!("Vec:          {}", vec[1]);

    println!("\nStep 4: erase at index 1");
    array.erase_at(1)?;
    vec.remove(1);
    assert_eq!(array, [10, 30]);
    println!("DynamicArray: len = {}", array.len());
    println!("Vec:          len = {}", vec.len());

    println!("\nStep 5: reserve(100), then shrink_to_fit()");
    array.reserve(100)?;
    // Vec::reserve takes the additional count, not the total.
    vec.reserve(100 - vec.len());
    println!("DynamicArray: capacity = {}", array.capacity());
    println!("Vec:          capacity = {}", vec.capacity());

    array.shrink_to_fit()?;
    vec.shrink_to_fit();
    assert_eq!(array.capacity(), 2);
    println!("DynamicArray: capacity = {}", array.capacity());
    println!("Vec:          capacity = {}", vec.capacity());

    Ok(())
}
