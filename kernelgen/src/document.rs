//! Layout of the generated `smm_acc_kernels.h`
//!
//! The banner and include guard are matched byte for byte by the downstream
//! build, so they are kept verbatim.

/// Placed before every kernel declaration
pub const SEPARATOR: &str =
    "//===========================================================================\n";

pub const HEADER: &str = concat!(
    "/*------------------------------------------------------------------------------------------------*\n",
    " * Copyright (C) by the DBCSR developers group - All rights reserved                              *\n",
    " * This file is part of the DBCSR library.                                                        *\n",
    " *                                                                                                *\n",
    " * For information on the license, see the LICENSE file.                                          *\n",
    " * For further information please visit https://dbcsr.cp2k.org                                    *\n",
    " * SPDX-License-Identifier: GPL-2.0+                                                              *\n",
    " *------------------------------------------------------------------------------------------------*/\n",
    "\n",
    "/*****************************************************************************\n",
    " *  FILE GENERATED BY SCRIPT 'generate_kernels.py' DO NOT EDIT             *\n",
    " *****************************************************************************/\n",
    "\n",
    "#ifndef SMM_ACC_H\n",
    "#define SMM_ACC_H\n",
    "#include <string>\n",
);

pub const FOOTER: &str = "#endif  // SMM_ACC_H\n//EOF\n\n";

/// Generated header under construction
#[derive(Debug, Clone)]
pub struct OutputDocument {
    body: String,
    declarations: usize,
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDocument {
    pub fn new() -> Self {
        Self {
            body: String::from(HEADER),
            declarations: 0,
        }
    }

    /// Append one serialized kernel declaration
    pub fn push_declaration(&mut self, declaration: &str) {
        self.body.push('\n');
        self.body.push_str(SEPARATOR);
        self.body.push_str(declaration);
        self.body.push('\n');
        self.declarations += 1;
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations
    }

    /// Close the include guard and return the full text
    pub fn finish(mut self) -> String {
        self.body.push_str(FOOTER);
        self.body
    }
}
