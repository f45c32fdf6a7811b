// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod file_location;
mod source_code;

pub use self::{
    file_location::FileLocation,
    source_code::SourceCode,
};
