//! License text for the program and its bundled dependencies, for the
//! `--license` option. Binary distributions drop the dependency sources,
//! so the license texts travel in the binary itself.

const SEPARATOR: &str = "
-----------------------------------------------------------------------------
";

/// The full license text: this crate's license followed by the licenses
/// of the statically linked dependencies.
pub fn full_text() -> String {
    [
        "SOFTWARE LICENSES",
        MDMETA_LICENSE,
        PULLDOWN_CMARK_LICENSE,
        SERDE_LICENSE,
        CLAP_LICENSE,
        THISERROR_LICENSE,
        "END",
    ]
    .join(SEPARATOR)
}

const MDMETA_LICENSE: &str = "\
THE mdmeta LIBRARY AND PROGRAM (MIT License).

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to
deal in the Software without restriction, including without limitation the
rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
sell copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
IN THE SOFTWARE.
";

const PULLDOWN_CMARK_LICENSE: &str = "\
PULLDOWN-CMARK (MIT License).
https://crates.io/crates/pulldown-cmark

Copyright (c) 2015 Google Inc. and the pulldown-cmark contributors.
Distributed under the MIT License; see the crate source for the full text.
";

const SERDE_LICENSE: &str = "\
SERDE, SERDE_JSON AND SERDE_YAML (MIT OR Apache-2.0).
https://crates.io/crates/serde
https://crates.io/crates/serde_json
https://crates.io/crates/serde_yaml

Copyright the Serde developers. Dual-licensed under the MIT License and the
Apache License, Version 2.0; see the crate sources for the full texts.
";

const CLAP_LICENSE: &str = "\
CLAP (MIT OR Apache-2.0).
https://crates.io/crates/clap

Copyright the clap contributors. Dual-licensed under the MIT License and the
Apache License, Version 2.0; see the crate source for the full texts.
";

const THISERROR_LICENSE: &str = "\
THISERROR (MIT OR Apache-2.0).
https://crates.io/crates/thiserror

Copyright David Tolnay. Dual-licensed under the MIT License and the Apache
License, Version 2.0; see the crate source for the full texts.
";
