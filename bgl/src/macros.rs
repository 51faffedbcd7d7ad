// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

/// Declares a closed table of raw codes with their database strings.
///
/// The generated enum has an extra `Unknown` variant which keeps codes that
/// are missing in the table, so decoding never fails on new codes.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $text:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A code which is not part of this table.
            Unknown($repr),
        }

        impl $name {
            /// Returns the raw code.
            pub fn code(&self) -> $repr {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unknown(code) => *code,
                }
            }

            /// Returns the string stored in the database.
            ///
            /// Unknown codes return an empty string.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Unknown(_) => "",
                }
            }
        }

        impl From<$repr> for $name {
            fn from(code: $repr) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    code => Self::Unknown(code),
                }
            }
        }

        impl $crate::FixedField for $name {
            const LENGTH: usize = <$repr as $crate::FixedField>::LENGTH;

            #[inline]
            fn from_bytes(bytes: &[u8]) -> Self {
                Self::from(<$repr as $crate::FixedField>::from_bytes(bytes))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declares the record tags of one scope with their diagnostic names.
macro_rules! record_scope {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $tag:literal => $text:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All tags of this scope.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the raw tag value.
            pub fn tag(&self) -> u16 {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }

            /// Returns the diagnostic name of the tag.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Returns the tag for a raw value, or `None` if the value is not
            /// part of this scope.
            pub fn from_tag(tag: u16) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
