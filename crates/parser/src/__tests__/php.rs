//! PHP statement corpus. Documents open with `<?php` and close with `?>`.

#[cfg(test)]
mod tests {
  use crate::__tests__::helpers::{assert_compound, assert_statements};

  #[test]
  fn test_simple_statements() {
    assert_statements(
      "php",
      "
      <?php
      ▶️echo \"hello\";◀️
      ▶️$b = $a = 5;◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_if_elseif_else() {
    assert_statements(
      "php",
      "
      <?php
      ▶️if (1 == 2) ▶️{
          ▶️echo \"hello\";◀️
      }◀️ elseif (1 == 3) ▶️{
          ▶️echo \"world\";◀️
      }◀️ else ▶️{
          ▶️echo \"foo\";◀️
      }◀️◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_switch() {
    assert_statements(
      "php",
      "
      <?php
      ▶️switch ($a) {
          case 1:
              ▶️echo \"hello\";◀️
              ▶️break;◀️
          default:
              ▶️echo \"foo\";◀️
      }◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_loops() {
    assert_statements(
      "php",
      "
      <?php
      ▶️while (true) ▶️{
          ▶️break;◀️
      }◀️◀️
      ▶️do ▶️{
          ▶️break;◀️
      }◀️ while (true);◀️
      ▶️for ($i = 0; $i < 10; $i++) ▶️{
          ▶️$str += ' ';◀️
      }◀️◀️
      ▶️foreach ($arr as $key => $value) ▶️{
          ▶️echo $key;◀️
      }◀️◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_try_catch_finally() {
    assert_statements(
      "php",
      "
      <?php
      ▶️try ▶️{
          ▶️throw new Exception();◀️
      }◀️ catch (Exception $e) ▶️{
          ▶️echo $e;◀️
      }◀️ finally ▶️{
          ▶️echo \"done\";◀️
      }◀️◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_functions() {
    assert_statements(
      "php",
      "
      <?php
      ▶️function example($arg_1) ▶️{
          ▶️echo \"hello\";◀️
          ▶️return $retval;◀️
      }◀️◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_class_members() {
    assert_statements(
      "php",
      "
      <?php
      ▶️class Example extends BaseClass implements Interface1 {
          ▶️use Trait1, Trait2;◀️
          ▶️const EXAMPLE = 1;◀️
          ▶️public $field_1;◀️
          ▶️public function example($arg_1) ▶️{
              ▶️return $retval;◀️
          }◀️◀️
      }◀️
      ?>
      ",
    );
    assert_statements(
      "php",
      "
      <?php
      ▶️interface Example {
          ▶️public function example($arg_1);◀️
      }◀️
      ▶️trait Helper {
          ▶️public function help() ▶️{
              ▶️echo \"hello\";◀️
          }◀️◀️
      }◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_namespaces() {
    assert_statements(
      "php",
      "
      <?php
      ▶️namespace Example;◀️
      ▶️use Example\\ExampleClass;◀️
      ?>
      ",
    );
  }

  #[test]
  fn test_compound_flags() {
    assert_compound("php", "<?php\n❚if (true)\n{\n\t$foo = 1;\n}\n?>", true);
    assert_compound("php", "<?php\n❚$foo = 1;\n?>", false);
  }
}
