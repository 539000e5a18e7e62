/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Global engine enums, passed through the boundary unchanged.

use crate::meta::engine_enum;

engine_enum! {
    /// The engine's general-purpose status code. Returned by several
    /// bound methods; never interpreted by the binding layer.
    pub enum Error {
        OK = 0,
        FAILED = 1,
        ERR_UNAVAILABLE = 2,
        ERR_UNCONFIGURED = 3,
        ERR_UNAUTHORIZED = 4,
        ERR_PARAMETER_RANGE_ERROR = 5,
        ERR_OUT_OF_MEMORY = 6,
        ERR_FILE_NOT_FOUND = 7,
        ERR_INVALID_PARAMETER = 30,
        ERR_INVALID_DATA = 31,
        ERR_CANT_CONNECT = 20,
        ERR_CANT_RESOLVE = 22,
        ERR_CONNECTION_ERROR = 23,
        ERR_BUSY = 44,
        ERR_METHOD_NOT_FOUND = 32,
        ERR_DOES_NOT_EXIST = 35,
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::meta::EngineEnum;

    #[test]
    fn error_round_trips_through_its_ordinal() {
        for error in [Error::OK, Error::FAILED, Error::ERR_CANT_CONNECT] {
            assert_eq!(Error::try_from_ord(error.ord()), Some(error));
        }

        assert_eq!(Error::try_from_ord(-1), None);
    }
}
