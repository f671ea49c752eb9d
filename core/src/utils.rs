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

//! Redaction helpers for values that must never show up in logs.

use std::fmt::{Debug, Formatter};

/// Characters kept on each side of a redacted value.
const VISIBLE: usize = 3;
/// Values shorter than this are hidden completely.
const MIN_PARTIAL_LEN: usize = 12;

/// Redact hides a sensitive string in `Debug` output.
///
/// Long values keep their first and last three characters (`AKI***001`) so
/// that two keys can still be told apart. Short values become `***` and an
/// empty value prints `EMPTY`.
#[derive(Clone, Copy)]
pub struct Redact<'a>(Option<&'a str>);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self.0 {
            None | Some("") => return f.write_str("EMPTY"),
            Some(v) => v,
        };

        let count = value.chars().count();
        if count < MIN_PARTIAL_LEN {
            return f.write_str("***");
        }

        let head: String = value.chars().take(VISIBLE).collect();
        let tail: String = value.chars().skip(count - VISIBLE).collect();
        write!(f, "{head}***{tail}")
    }
}

/// RedactBytes hides secret bytes such as derived keys, only their length is shown.
#[derive(Clone, Copy)]
pub struct RedactBytes<'a>(&'a [u8]);

impl<'a> From<&'a [u8]> for RedactBytes<'a> {
    fn from(value: &'a [u8]) -> Self {
        RedactBytes(value)
    }
}

impl Debug for RedactBytes<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.len() {
            0 => f.write_str("EMPTY"),
            n => write!(f, "<{n} bytes redacted>"),
        }
    }
}
