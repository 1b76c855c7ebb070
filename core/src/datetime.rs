// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod expression;
mod util;
mod window;

pub use expression::{DateExpression, DateSequence, parse_date_sequence};
pub use util::{end_of_day, parse_date, same_month, start_of_day};
pub use window::{ClockTime, TimeWindow, parse_end_time};
