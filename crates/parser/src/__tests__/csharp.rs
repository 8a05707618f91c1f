//! C# statement corpus.

#[cfg(test)]
mod tests {
  use crate::__tests__::helpers::{assert_compound, assert_statements};

  #[test]
  fn test_compilation_unit_items() {
    assert_statements("csharp", "▶️extern alias Example;◀️");
    assert_statements("csharp", "▶️using System;◀️");
    assert_statements("csharp", "▶️namespace Example;◀️");
    assert_statements("csharp", "▶️namespace Example { }◀️");
    assert_statements("csharp", "▶️Console.WriteLine(\"example\");◀️");
  }

  #[test]
  fn test_type_declarations() {
    assert_statements(
      "csharp",
      "
      ▶️enum Direction
      {
          North,
          South
      }◀️
      ▶️struct Example
      {
      }◀️
      ▶️interface IExample
      {
      }◀️
      ",
    );
  }

  #[test]
  fn test_members() {
    assert_statements(
      "csharp",
      "
      ▶️class Example
      {
          ▶️bool flag = true;◀️
          ▶️event EventHandler onEvent;◀️
          ▶️delegate void Action();◀️
          ▶️int Area => _width * _height;◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_properties_and_accessors() {
    assert_statements(
      "csharp",
      "
      ▶️class Example
      {
          ▶️int Len
          {
              ▶️get ▶️{ ▶️return _len;◀️ }◀️◀️
              ▶️set ▶️{ ▶️_len = value;◀️ }◀️◀️
          }◀️
          ▶️int Capacity { ▶️get;◀️ ▶️init;◀️ }◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_methods_constructors_operators() {
    assert_statements(
      "csharp",
      "
      ▶️class Example
      {
          ▶️Example()
          ▶️{
          }◀️◀️
          ▶️~Example()
          ▶️{
          }◀️◀️
          ▶️Example operator +(Example e) ▶️{ ▶️return new Example();◀️ }◀️◀️
          ▶️explicit operator int(Example e) ▶️{ ▶️return 0;◀️ }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_statements_in_methods() {
    assert_statements(
      "csharp",
      "
      ▶️class Example
      {
          ▶️void Run()
          ▶️{
              ▶️uint i = uint.MaxValue;◀️
              ▶️checked
              ▶️{
                  ▶️i += 10;◀️
              }◀️◀️
              ▶️for (int j = 0; j < 5; j++)
              ▶️{
                  ▶️Console.WriteLine(j);◀️
              }◀️◀️
              ▶️lock (x)
              ▶️{
                  // do work
              }◀️◀️
              ▶️return;◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_switch_sections_are_transparent() {
    assert_statements(
      "csharp",
      "
      ▶️class Example
      {
          ▶️void Diagnostics(int a)
          ▶️{
              ▶️switch (a)
              {
                  case 1:
                      ▶️Console.WriteLine(\"one\");◀️
                      ▶️break;◀️
                  default:
                      ▶️break;◀️
              }◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_try_catch_finally() {
    assert_statements(
      "csharp",
      "
      ▶️class Example
      {
          ▶️void Run()
          ▶️{
              ▶️try
              ▶️{
                  ▶️throw new Exception(\"Error occurred\");◀️
              }◀️
              catch (Exception e)
              ▶️{
                  ▶️Console.WriteLine(e.Message);◀️
              }◀️
              finally
              ▶️{
                  ▶️Console.WriteLine(\"done\");◀️
              }◀️◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_compound_flags() {
    assert_compound("csharp", "class Example\n{\n}", true);
    assert_compound("csharp", "class Example\n{\n\t❚void Run()\n\t{\n\t}\n}", true);
    assert_compound("csharp", "class Example\n{\n\t❚bool flag = true;\n}", false);
    assert_compound("csharp", "using System;", false);
  }
}
