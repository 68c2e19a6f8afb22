// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Dense row-major `rows × cols` table backing the dynamic program.
#[derive(Debug, Clone)]
pub(super) struct Table<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Table<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.cols, "column {col} out of range");
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(col < self.cols, "column {col} out of range");
        self.cells[row * self.cols + col] = value;
    }
}
