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

use crate::constants::API_PREFIX;
use std::fmt::{Display, Formatter};

/// Resource is a listable collection of the SCP control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Availability zones, `azs`.
    AvailabilityZones,
    /// Server images, `images`.
    Images,
    /// Virtual private clouds, `vpcs`.
    Vpcs,
    /// Subnets, `subnets`.
    Subnets,
    /// Virtual machines, `servers`.
    Servers,
    /// Images published by platform services, `service-images`.
    ServiceImages,
    /// Storage tags, `storages/tags`.
    StorageTags,
    /// Storage pools, `storages`.
    Storages,
}

impl Resource {
    /// Every resource in the order they are usually reported.
    pub const ALL: [Resource; 8] = [
        Resource::AvailabilityZones,
        Resource::Images,
        Resource::Vpcs,
        Resource::Subnets,
        Resource::Servers,
        Resource::ServiceImages,
        Resource::StorageTags,
        Resource::Storages,
    ];

    fn suffix(&self) -> &'static str {
        match self {
            Resource::AvailabilityZones => "azs",
            Resource::Images => "images",
            Resource::Vpcs => "vpcs",
            Resource::Subnets => "subnets",
            Resource::Servers => "servers",
            Resource::ServiceImages => "service-images",
            Resource::StorageTags => "storages/tags",
            Resource::Storages => "storages",
        }
    }

    /// Request path like `/janus/20180725/azs`.
    pub fn path(&self) -> String {
        format!("{API_PREFIX}/{}", self.suffix())
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::AvailabilityZones => "Availability Zones",
            Resource::Images => "Images",
            Resource::Vpcs => "VPCs",
            Resource::Subnets => "Subnets",
            Resource::Servers => "Servers",
            Resource::ServiceImages => "Service Images",
            Resource::StorageTags => "Storage Tags",
            Resource::Storages => "Storages",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
