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

//! Payload of the server creation endpoint.

use serde::{Deserialize, Serialize};

/// CreateServerRequest is the body of `POST /janus/20180725/servers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServerRequest {
    pub az_id: String,
    pub location: Location,
    pub storage_tag_id: String,
    pub image_id: String,
    pub cores: u32,
    pub sockets: u32,
    pub memory_mb: u64,
    pub count: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub advance_param: AdvanceParam,
    pub disks: Vec<Disk>,
    pub networks: Vec<Network>,
    /// `1` to start the server once created.
    pub power_on: u8,
}

/// Placement of the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
}

/// Advanced scheduling and hardware switches, `0` or `1` unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceParam {
    /// Boot device order, `c` boots from disk.
    pub boot_order: String,
    pub onboot: u8,
    pub schedopt: u8,
    pub abnormal_recovery: u8,
    pub cpu_hotplug: u8,
    pub mem_hotplug: u8,
    pub balloon_memory: u8,
    pub hugepage_memory: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub preallocate: u8,
    pub size_mb: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub vif_id: String,
    pub connect: u8,
    pub model: String,
    pub host_iso: u8,
}

impl Default for AdvanceParam {
    fn default() -> Self {
        Self {
            boot_order: "c".to_string(),
            onboot: 0,
            schedopt: 0,
            abnormal_recovery: 1,
            cpu_hotplug: 0,
            mem_hotplug: 0,
            balloon_memory: 0,
            hugepage_memory: 0,
        }
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self {
            id: "ide0".to_string(),
            kind: "derive_disk".to_string(),
            preallocate: 0,
            size_mb: 81920,
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Self {
            vif_id: "net0".to_string(),
            connect: 1,
            model: "virtio".to_string(),
            host_iso: 0,
        }
    }
}

/// Template of a small powered off server with one derived disk and one
/// virtio nic. Ids must be adjusted to the target control plane.
impl Default for CreateServerRequest {
    fn default() -> Self {
        Self {
            az_id: "9d5d56c1-10bb-45ba-9862-acf2bd4bcf64".to_string(),
            location: Location {
                id: "cluster".to_string(),
            },
            storage_tag_id: "11111111-1111-1111-1111-111111111111".to_string(),
            image_id: "fbecf65e-fda0-4b55-bbdf-aac1034cd89e".to_string(),
            cores: 1,
            sockets: 1,
            memory_mb: 1024,
            count: 1,
            name: "terraform_wasin".to_string(),
            description: String::new(),
            advance_param: AdvanceParam::default(),
            disks: vec![Disk::default()],
            networks: vec![Network::default()],
            power_on: 0,
        }
    }
}
