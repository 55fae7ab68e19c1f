// Copyright 2023 The AppSvc CLI Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Consumer group operations

mod operations;
mod types;

pub use operations::classify_consumer_group_error;
pub use operations::ConsumerGroupService;
pub use operations::VIEW_OPERATION;
pub use types::Consumer;
pub use types::ConsumerGroup;
pub use types::ConsumerGroupMetrics;
