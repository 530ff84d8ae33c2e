
use warhold_test_utils::prelude::*;

use super::*;
